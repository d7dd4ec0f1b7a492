use std::{io::Write, path::PathBuf};

use clap::Parser;

use crate::common::{
    AmbiguityPolicy, ArtifactArgs, BytecodeField, MatchError, Result, DEFAULT_DESCRIPTOR_SUFFIX,
};

use super::{check_deployment, CheckOptions, CheckReport, MissingArtifactPolicy};

/// Compares implementation descriptors with compiled artifacts
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Deployment directories to check, one per network (e.g. `deployments/zgTestnetTurbo`).
    ///
    /// Directories are checked in sequence.
    #[arg(required = true, num_args = 1..)]
    pub deployments: Vec<PathBuf>,

    /// Artifacts tree configuration
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// File name suffix identifying implementation descriptors
    #[arg(long, default_value = DEFAULT_DESCRIPTOR_SUFFIX)]
    pub suffix: String,

    /// Bytecode field compared on both sides
    #[arg(long, value_enum, default_value_t = BytecodeField::Bytecode)]
    pub field: BytecodeField,

    /// What to do when several artifacts match a descriptor.
    ///
    /// Artifacts match when their file name contains the descriptor's artifact name, so
    /// `FlowImpl.json` also matches `FixedPriceFlow.json`. With `first`, the earliest match
    /// in lexicographic traversal order wins, which may be such a longer name. Use `reject`
    /// to fail and list every candidate instead.
    #[arg(long = "on-ambiguous", value_enum, default_value_t = AmbiguityPolicy::First)]
    pub on_ambiguous: AmbiguityPolicy,

    /// What to do when no artifact matches a descriptor
    #[arg(long = "on-missing", value_enum, default_value_t = MissingArtifactPolicy::Abort)]
    pub on_missing: MissingArtifactPolicy,
}

impl Cmd {
    /// Options shared by every deployment directory of this invocation.
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            artifacts_root: self.artifacts.root.clone(),
            suffix: self.suffix.clone(),
            field: self.field,
            ambiguity: self.on_ambiguous,
            missing: self.on_missing,
        }
    }

    /// Checks every deployment directory, writing status lines to stdout.
    pub fn run(&self) -> Result<Vec<CheckReport>> {
        let options = self.options();
        let mut out = std::io::stdout().lock();

        let mut reports = Vec::with_capacity(self.deployments.len());
        for dir in &self.deployments {
            reports.push(check_deployment(dir, &options, &mut out)?);
        }
        out.flush().map_err(MatchError::Output)?;

        Ok(reports)
    }
}
