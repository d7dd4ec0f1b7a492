//! Search of the compiled artifacts tree

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::{read_record, BytecodeField, MatchError, Result};

/// Extension of artifact files.
pub const ARTIFACT_EXTENSION: &str = ".json";

/// What to do when several artifacts match the same name fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AmbiguityPolicy {
    /// Use the first match in traversal order, which may be a longer contract name
    /// containing the fragment
    #[default]
    First,
    /// Fail with the list of candidates
    Reject,
}

/// Bytecode found in the artifacts tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArtifact {
    /// Path of the artifact file
    pub path: PathBuf,
    /// Value of the selected bytecode field
    pub bytecode: String,
}

/// Iterates over every `.json` file under `root`.
///
/// Entries of each directory are visited in lexicographic file name order, so the
/// sequence is the same on every filesystem.
pub fn json_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root).sort_by_file_name().into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            let is_json = entry.file_name().to_string_lossy().ends_with(ARTIFACT_EXTENSION);
            (is_json && entry.path().is_file()).then(|| Ok(entry.into_path()))
        }
        Err(err) => Some(Err(err.into())),
    })
}

/// Finds the bytecode of the artifact whose file name contains `fragment`.
///
/// Matching files that fail to parse are logged and skipped. Matching files without
/// the selected field (hardhat `.dbg.json` files, for instance) are passed over.
pub fn locate_artifact_bytecode(
    root: &Path,
    fragment: &str,
    field: BytecodeField,
    ambiguity: AmbiguityPolicy,
) -> Result<LocatedArtifact> {
    let mut candidates = Vec::new();

    for path in json_files(root) {
        let path = path?;
        let matches_name =
            path.file_name().is_some_and(|name| name.to_string_lossy().contains(fragment));
        if !matches_name {
            continue;
        }
        trace!(path = %path.display(), "Candidate artifact");

        let record = match read_record(&path) {
            Ok(record) => record,
            Err(err) if err.is_recoverable() => {
                warn!(%err, "Skipping artifact");
                continue;
            }
            Err(err) => return Err(err),
        };

        let Some(bytecode) = field.select(&record) else {
            debug!(path = %path.display(), field = field.json_key(), "Artifact has no bytecode");
            continue;
        };

        let located = LocatedArtifact { bytecode: bytecode.to_string(), path };
        match ambiguity {
            AmbiguityPolicy::First => return Ok(located),
            AmbiguityPolicy::Reject => candidates.push(located),
        }
    }

    match candidates.len() {
        0 => Err(MatchError::ArtifactNotFound {
            fragment: fragment.to_string(),
            root: root.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(MatchError::AmbiguousArtifact {
            fragment: fragment.to_string(),
            candidates: candidates.into_iter().map(|c| c.path).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn json_files_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b/Two.json", "{}");
        write(dir.path(), "a/One.json", "{}");
        write(dir.path(), "a/notes.txt", "");
        fs::create_dir_all(dir.path().join("c/Dir.json")).unwrap();

        let files: Vec<_> = json_files(dir.path())
            .map(|p| p.unwrap().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(files, vec![PathBuf::from("a/One.json"), PathBuf::from("b/Two.json")]);
    }

    #[test]
    fn skips_dbg_and_malformed_matches() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "contracts/Flow.sol/Flow.dbg.json", r#"{"buildInfo":"x"}"#);
        write(dir.path(), "a/Flow.json", "{ broken");
        write(dir.path(), "contracts/Flow.sol/Flow.json", r#"{"bytecode":"0x60"}"#);

        let located = locate_artifact_bytecode(
            dir.path(),
            "Flow.json",
            BytecodeField::Bytecode,
            AmbiguityPolicy::First,
        )
        .unwrap();
        assert_eq!(located.bytecode, "0x60");
        assert!(located.path.ends_with("contracts/Flow.sol/Flow.json"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate_artifact_bytecode(
            &dir.path().join("nope"),
            "Flow.json",
            BytecodeField::Bytecode,
            AmbiguityPolicy::First,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::Walk(_)));
    }
}
