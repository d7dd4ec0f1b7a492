use std::{io::Write, process::ExitCode};

use clap::{Parser, Subcommand};

use crate::common::{LogArgs, MatchError};

/// Command line of the bytecode-match tool
#[derive(Parser, Debug)]
#[command(name = "bytecode-match", infer_subcommands = true, version = "0.1")]
pub struct MainCmd {
    /// Logging configuration
    #[command(flatten)]
    pub log: LogArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommand enumeration for the bytecode-match CLI tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare implementation descriptors of one or more networks with compiled artifacts
    Check(crate::check::Cmd),
    /// Show the deployed size of compiled contracts
    Codesize(crate::codesize::Cmd),
}

/// Error types for the main command system
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A check or report aborted
    #[error("{0}")]
    Match(#[from] MatchError),
    /// At least one network had bytecode that differs from the artifacts
    #[error("bytecode mismatch in network(s): {}", .0.join(", "))]
    Mismatch(Vec<String>),
}

impl MainCmd {
    /// Execute the selected subcommand
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Command::Check(cmd) => {
                let reports = cmd.run()?;
                let failed: Vec<String> = reports
                    .into_iter()
                    .filter(|report| !report.all_matched())
                    .map(|report| report.network)
                    .collect();
                if failed.is_empty() {
                    Ok(())
                } else {
                    Err(Error::Mismatch(failed))
                }
            }
            Command::Codesize(cmd) => {
                cmd.run()?;
                Ok(())
            }
        }
    }
}

/// Prints the error of a finished command, if any, and maps the result to an exit code.
pub fn exit_code<W: Write>(result: Result<(), Error>, err_out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "{err}");
            ExitCode::FAILURE
        }
    }
}
