//! Implementation descriptors of a deployment directory

use std::{fs, path::Path};

use super::{MatchError, Result, ARTIFACT_EXTENSION};

/// Default file name suffix of implementation descriptors.
pub const DEFAULT_DESCRIPTOR_SUFFIX: &str = "Impl.json";

/// Lists the files directly in `dir` whose name ends with `suffix`, sorted by name.
pub fn list_descriptor_files(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let io_err = |source| MatchError::Io { path: dir.to_path_buf(), source };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();

    Ok(names)
}

/// Derives the artifact name fragment of a descriptor, e.g. `FlowImpl.json` -> `Flow.json`.
pub fn artifact_fragment(descriptor: &str, suffix: &str) -> String {
    let stem = descriptor.strip_suffix(suffix).unwrap_or(descriptor);
    format!("{stem}{ARTIFACT_EXTENSION}")
}

/// Network name of a deployment directory: its last path component.
pub fn network_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
