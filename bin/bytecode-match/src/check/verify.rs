use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use tracing::{debug, info, warn};

use crate::common::{
    artifact_fragment, list_descriptor_files, locate_artifact_bytecode, network_name, read_record,
    AmbiguityPolicy, BytecodeField, MatchError, Result, DEFAULT_ARTIFACTS_ROOT,
    DEFAULT_DESCRIPTOR_SUFFIX,
};

/// What to do when no artifact matches a descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MissingArtifactPolicy {
    /// Abort the run with a not-found error
    #[default]
    Abort,
    /// Report the descriptor as failed and continue
    Report,
}

/// Parameters of a deployment check.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Root of the compiled artifacts tree
    pub artifacts_root: PathBuf,
    /// File name suffix of implementation descriptors
    pub suffix: String,
    /// Bytecode field compared on both sides
    pub field: BytecodeField,
    /// Resolution of several matching artifacts
    pub ambiguity: AmbiguityPolicy,
    /// Handling of descriptors without an artifact
    pub missing: MissingArtifactPolicy,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            artifacts_root: PathBuf::from(DEFAULT_ARTIFACTS_ROOT),
            suffix: DEFAULT_DESCRIPTOR_SUFFIX.to_string(),
            field: BytecodeField::default(),
            ambiguity: AmbiguityPolicy::default(),
            missing: MissingArtifactPolicy::default(),
        }
    }
}

/// Outcome of a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Descriptor and artifact bytecode are equal
    Matched {
        /// The artifact compared against
        artifact: PathBuf,
    },
    /// Descriptor and artifact bytecode differ
    Mismatched {
        /// The artifact compared against
        artifact: PathBuf,
    },
    /// No artifact matched the descriptor
    ArtifactMissing {
        /// The artifact name fragment searched for
        fragment: String,
    },
}

/// Result of checking one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    /// Descriptor file name
    pub descriptor: String,
    /// Comparison outcome
    pub status: FileStatus,
}

impl FileCheck {
    /// Returns `true` if the descriptor matched its artifact.
    pub const fn is_match(&self) -> bool {
        matches!(self.status, FileStatus::Matched { .. })
    }

    /// Status line of this descriptor in `network`.
    pub fn display<'a>(&'a self, network: &'a str) -> impl fmt::Display + 'a {
        FileLine { check: self, network }
    }
}

struct FileLine<'a> {
    check: &'a FileCheck,
    network: &'a str,
}

impl fmt::Display for FileLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { check, network } = self;
        match &check.status {
            FileStatus::Matched { .. } => {
                write!(f, "{} bytecode matched, network: {network}", check.descriptor)
            }
            FileStatus::Mismatched { .. } => {
                write!(f, "[ERROR] {} bytecode is different, network: {network}", check.descriptor)
            }
            FileStatus::ArtifactMissing { fragment } => write!(
                f,
                "[ERROR] {} artifact {fragment} not found, network: {network}",
                check.descriptor
            ),
        }
    }
}

/// Result of checking a whole deployment directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Network name, the last component of the deployment directory
    pub network: String,
    /// Per-descriptor outcomes, in file name order
    pub files: Vec<FileCheck>,
    /// Descriptors skipped because they could not be parsed
    pub skipped: Vec<PathBuf>,
}

impl CheckReport {
    /// Returns `true` if every checked descriptor matched. Skipped files do not count.
    pub fn all_matched(&self) -> bool {
        self.files.iter().all(FileCheck::is_match)
    }

    /// Aggregate status line of the network.
    pub fn summary(&self) -> String {
        if self.all_matched() {
            format!("network {} bytecode matched", self.network)
        } else {
            format!("[ERROR] network {} bytecode mismatched", self.network)
        }
    }
}

/// Checks every implementation descriptor of the deployment directory `dir`.
///
/// Writes one status line per descriptor and one aggregate line to `out`. Descriptors
/// that are not valid JSON are reported and skipped; every other error aborts the check.
pub fn check_deployment<W: Write>(
    dir: &Path,
    options: &CheckOptions,
    out: &mut W,
) -> Result<CheckReport> {
    let mut report = CheckReport { network: network_name(dir), ..Default::default() };
    info!(network = %report.network, dir = %dir.display(), "Checking deployment");

    let descriptors = list_descriptor_files(dir, &options.suffix)?;
    debug!(count = descriptors.len(), "Found descriptors");

    for descriptor in descriptors {
        let path = dir.join(&descriptor);
        let record = match read_record(&path) {
            Ok(record) => record,
            Err(err) if err.is_recoverable() => {
                warn!(%err, "Skipping descriptor");
                writeln!(out, "{err}").map_err(MatchError::Output)?;
                report.skipped.push(path);
                continue;
            }
            Err(err) => return Err(err),
        };

        let expected = options.field.select(&record).ok_or_else(|| MatchError::MissingField {
            file: path.clone(),
            field: options.field.json_key(),
        })?;

        let fragment = artifact_fragment(&descriptor, &options.suffix);
        let status = match locate_artifact_bytecode(
            &options.artifacts_root,
            &fragment,
            options.field,
            options.ambiguity,
        ) {
            Ok(artifact) if artifact.bytecode == expected => {
                FileStatus::Matched { artifact: artifact.path }
            }
            Ok(artifact) => FileStatus::Mismatched { artifact: artifact.path },
            Err(err @ MatchError::ArtifactNotFound { .. })
                if options.missing == MissingArtifactPolicy::Report =>
            {
                warn!(%err, %descriptor, "Artifact missing");
                FileStatus::ArtifactMissing { fragment }
            }
            Err(err) => return Err(err),
        };
        debug!(%descriptor, ?status, "Compared bytecode");

        let check = FileCheck { descriptor, status };
        writeln!(out, "{}", check.display(&report.network)).map_err(MatchError::Output)?;
        report.files.push(check);
    }

    writeln!(out, "{}", report.summary()).map_err(MatchError::Output)?;
    info!(
        network = %report.network,
        checked = report.files.len(),
        skipped = report.skipped.len(),
        matched = report.all_matched(),
        "Deployment checked"
    );

    Ok(report)
}
