use std::{
    fmt,
    path::{Path, PathBuf},
};

use alloy_primitives::hex;
use tracing::{debug, trace, warn};

use crate::common::{json_files, read_record, Result};

/// Maximum deployed contract size in bytes (EIP-170).
pub const MAX_CODE_SIZE: usize = 0x6000;

/// Deployed size of one compiled contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSize {
    /// Contract name from the artifact
    pub name: String,
    /// Deployed bytecode size in bytes
    pub size: usize,
    /// Artifact file the size was read from
    pub artifact: PathBuf,
}

impl ContractSize {
    /// Returns `true` if the contract cannot be deployed under EIP-170.
    pub const fn exceeds_limit(&self) -> bool {
        self.size > MAX_CODE_SIZE
    }
}

impl fmt::Display for ContractSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exceeds_limit() {
            f.write_str("[ERROR] ")?;
        }
        write!(f, "{}:\t{} bytes (max {MAX_CODE_SIZE})", self.name, self.size)
    }
}

/// Size in bytes of a hex-encoded deployed bytecode.
///
/// Unlinked bytecode still holds `__$...$__` library placeholders and is measured by
/// its string length instead.
pub fn deployed_size(code: &str) -> usize {
    match hex::decode(code) {
        Ok(bytes) => bytes.len(),
        Err(err) => {
            trace!(%err, "Measuring undecodable bytecode by length");
            code.strip_prefix("0x").unwrap_or(code).len() / 2
        }
    }
}

/// Collects the deployed size of every contract under the artifacts `root`.
///
/// Only artifacts named `contract` are kept when a name is given. Contracts without
/// runtime code are omitted; the result is sorted by size, largest first.
pub fn collect_sizes(root: &Path, contract: Option<&str>) -> Result<Vec<ContractSize>> {
    let mut sizes = Vec::new();

    for path in json_files(root) {
        let path = path?;
        let record = match read_record(&path) {
            Ok(record) => record,
            Err(err) if err.is_recoverable() => {
                warn!(%err, "Skipping artifact");
                continue;
            }
            Err(err) => return Err(err),
        };

        let (Some(name), Some(code)) = (record.contract_name, record.deployed_bytecode) else {
            continue;
        };
        if contract.is_some_and(|wanted| wanted != name) {
            continue;
        }

        let size = deployed_size(&code);
        if size == 0 {
            debug!(%name, "No runtime code");
            continue;
        }
        if size > MAX_CODE_SIZE {
            warn!(%name, size, "Contract exceeds EIP-170 size limit");
        }
        sizes.push(ContractSize { name, size, artifact: path });
    }

    sizes.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
    Ok(sizes)
}
