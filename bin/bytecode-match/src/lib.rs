//! Deployment bytecode integrity checks.
//!
//! Compares the bytecode recorded in hardhat-deploy implementation descriptors
//! (`deployments/<network>/<Name>Impl.json`) with the bytecode of the compiled
//! artifacts (`artifacts/**/<Name>.json`), and reports contract sizes against the
//! EIP-170 limit.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cmd;
pub use cmd::*;

/// Descriptor-versus-artifact bytecode verification
pub mod check;
/// Deployed contract size report
pub mod codesize;
/// Shared arguments, error types, record loading and logging
pub mod common;
