//! `bytecode-match` CLI tool for verifying deployed contract bytecode
//!
//! This tool checks that the bytecode recorded for each deployed implementation
//! matches the bytecode produced by the compiler.

use std::process::ExitCode;

use bytecode_match::{exit_code, MainCmd};
use clap::Parser;

fn main() -> ExitCode {
    set_thread_panic_hook();
    let cmd = MainCmd::parse();
    cmd.log.init();
    exit_code(cmd.run(), &mut std::io::stderr())
}

/// Sets thread panic hook, useful for having tests that panic.
fn set_thread_panic_hook() {
    use std::{
        backtrace::Backtrace,
        panic::{set_hook, take_hook},
        process::exit,
    };
    let orig_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        eprintln!("Custom backtrace: {}", Backtrace::capture());
        orig_hook(panic_info);
        exit(1);
    }));
}
