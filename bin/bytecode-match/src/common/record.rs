//! JSON records shared by deployment descriptors and compiled artifacts

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::{MatchError, Result};

/// The subset of a hardhat artifact or hardhat-deploy descriptor this tool reads.
///
/// Every other field is ignored. A field holding anything but a string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytecodeRecord {
    /// Contract name, present in compiled artifacts
    #[serde(default, deserialize_with = "string_or_absent")]
    pub contract_name: Option<String>,
    /// Creation bytecode as a hex string
    #[serde(default, deserialize_with = "string_or_absent")]
    pub bytecode: Option<String>,
    /// Runtime bytecode as a hex string
    #[serde(default, deserialize_with = "string_or_absent")]
    pub deployed_bytecode: Option<String>,
}

fn string_or_absent<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Which bytecode string of a record is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BytecodeField {
    /// Creation bytecode (`bytecode`)
    #[default]
    Bytecode,
    /// Runtime bytecode (`deployedBytecode`)
    DeployedBytecode,
}

impl BytecodeField {
    /// JSON key of the field.
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::Bytecode => "bytecode",
            Self::DeployedBytecode => "deployedBytecode",
        }
    }

    /// Returns the selected field of `record`, if present.
    pub fn select(self, record: &BytecodeRecord) -> Option<&str> {
        match self {
            Self::Bytecode => record.bytecode.as_deref(),
            Self::DeployedBytecode => record.deployed_bytecode.as_deref(),
        }
    }
}

/// Load a [`BytecodeRecord`] from a JSON file.
///
/// Only text that is not valid JSON is a [`MatchError::JsonParse`]. Valid JSON that is
/// not an object yields an empty record, so callers see every field as absent.
pub fn read_record(path: &Path) -> Result<BytecodeRecord> {
    let content = fs::read_to_string(path)
        .map_err(|source| MatchError::Io { path: path.to_path_buf(), source })?;
    let parse_err = |source| MatchError::JsonParse { file: path.to_path_buf(), source };

    let value: Value = serde_json::from_str(&content).map_err(parse_err)?;
    if !value.is_object() {
        debug!(path = %path.display(), "JSON document is not an object");
        return Ok(BytecodeRecord::default());
    }

    BytecodeRecord::deserialize(value).map_err(parse_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let record: BytecodeRecord = serde_json::from_str(
            r#"{"address":"0x01","abi":[],"bytecode":"0x6080","deployedBytecode":"0x6001"}"#,
        )
        .unwrap();
        assert_eq!(BytecodeField::Bytecode.select(&record), Some("0x6080"));
        assert_eq!(BytecodeField::DeployedBytecode.select(&record), Some("0x6001"));
        assert_eq!(record.contract_name, None);
    }

    #[test]
    fn missing_field_selects_none() {
        let record: BytecodeRecord =
            serde_json::from_str(r#"{"_format":"hh-sol-dbg-1","buildInfo":"x"}"#).unwrap();
        assert_eq!(BytecodeField::Bytecode.select(&record), None);
    }

    #[test]
    fn non_string_fields_are_absent() {
        let record: BytecodeRecord =
            serde_json::from_str(r#"{"bytecode":5,"deployedBytecode":"0x01","contractName":null}"#)
                .unwrap();
        assert_eq!(BytecodeField::Bytecode.select(&record), None);
        assert_eq!(BytecodeField::DeployedBytecode.select(&record), Some("0x01"));
        assert_eq!(record.contract_name, None);
    }

    #[test]
    fn non_object_documents_are_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in [("list.json", r#"["Flow","0x6080"]"#), ("str.json", r#""0x6080""#)] {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            assert_eq!(read_record(&path).unwrap(), BytecodeRecord::default());
        }
    }

    #[test]
    fn read_record_classifies_errors() {
        let dir = tempfile::tempdir().unwrap();

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = read_record(&broken).unwrap_err();
        assert!(matches!(err, MatchError::JsonParse { .. }));
        assert!(err.is_recoverable());

        let absent = dir.path().join("absent.json");
        let err = read_record(&absent).unwrap_err();
        assert!(matches!(err, MatchError::Io { .. }));
        assert!(!err.is_recoverable());
    }
}
