//! Argument groups shared by the subcommands

use std::path::PathBuf;

use clap::Parser;

/// Default location of the hardhat artifacts tree, relative to the working directory
pub const DEFAULT_ARTIFACTS_ROOT: &str = "./artifacts";

/// Artifacts tree configuration
#[derive(Parser, Debug, Clone)]
pub struct ArtifactArgs {
    /// Root of the compiled artifacts tree. Searched recursively for `.json` files.
    #[arg(
        long = "artifacts",
        env = "BYTECODE_MATCH_ARTIFACTS",
        default_value = DEFAULT_ARTIFACTS_ROOT
    )]
    pub root: PathBuf,
}

impl Default for ArtifactArgs {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ARTIFACTS_ROOT) }
    }
}
