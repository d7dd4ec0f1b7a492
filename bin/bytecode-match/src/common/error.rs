use std::path::PathBuf;

/// How a [`MatchError`] affects the batch it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending file is logged and skipped, processing continues.
    Recoverable,
    /// The run is aborted.
    Fatal,
}

/// Error types for bytecode checks and reports
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A file could not be parsed as the expected JSON record
    #[error("Error decoding JSON in file: {}", file.display())]
    JsonParse {
        /// The file that failed to parse
        file: PathBuf,
        /// The underlying JSON error
        source: serde_json::Error,
    },

    /// A descriptor does not carry the bytecode field being compared
    #[error("{field} field not found for {}", file.display())]
    MissingField {
        /// The descriptor file
        file: PathBuf,
        /// Name of the missing JSON field
        field: &'static str,
    },

    /// No artifact under the root matched the name fragment
    #[error("{fragment} not found under {}", root.display())]
    ArtifactNotFound {
        /// File name fragment that was searched for
        fragment: String,
        /// Root of the artifacts tree
        root: PathBuf,
    },

    /// Several artifacts matched the name fragment and ambiguity is rejected
    #[error("{fragment} is ambiguous, candidates: {}", display_paths(candidates))]
    AmbiguousArtifact {
        /// File name fragment that was searched for
        fragment: String,
        /// Every matching artifact, in traversal order
        candidates: Vec<PathBuf>,
    },

    /// Failed to read a file or directory
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// The path that failed to read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to walk the artifacts tree
    #[error("Failed to walk artifacts tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to write status output
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl MatchError {
    /// Returns whether this error skips a single file or aborts the run.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::JsonParse { .. } => Severity::Recoverable,
            Self::MissingField { .. } |
            Self::ArtifactNotFound { .. } |
            Self::AmbiguousArtifact { .. } |
            Self::Io { .. } |
            Self::Walk(_) |
            Self::Output(_) => Severity::Fatal,
        }
    }

    /// Returns `true` if processing may continue past this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.severity(), Severity::Recoverable)
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Result type for bytecode checks
pub type Result<T> = std::result::Result<T, MatchError>;
