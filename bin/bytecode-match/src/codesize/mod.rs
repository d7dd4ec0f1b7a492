//! Codesize module reporting the deployed size of compiled contracts

mod cmd;
mod size;

pub use cmd::*;
pub use size::*;
