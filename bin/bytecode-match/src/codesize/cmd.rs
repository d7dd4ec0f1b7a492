use std::io::Write;

use clap::Parser;

use crate::common::{ArtifactArgs, MatchError, Result};

use super::{collect_sizes, ContractSize};

/// Shows the deployed size of compiled contracts
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Artifacts tree configuration
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Only report the contract with this name
    #[arg(long)]
    pub contract: Option<String>,
}

impl Cmd {
    /// Prints one line per contract, largest first.
    pub fn run(&self) -> Result<Vec<ContractSize>> {
        let sizes = collect_sizes(&self.artifacts.root, self.contract.as_deref())?;

        let mut out = std::io::stdout().lock();
        for size in &sizes {
            writeln!(out, "{size}").map_err(MatchError::Output)?;
        }
        out.flush().map_err(MatchError::Output)?;

        Ok(sizes)
    }
}
