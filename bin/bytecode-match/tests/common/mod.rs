//! Fixture trees shaped like a hardhat project: `deployments/<network>` and `artifacts`.

#![allow(dead_code, unreachable_pub)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use bytecode_match::check::CheckOptions;
use tempfile::TempDir;

pub const NETWORK: &str = "zgTestnetTurbo";

/// A temporary hardhat project.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let project = Self { dir: tempfile::tempdir().unwrap() };
        fs::create_dir_all(project.deployment()).unwrap();
        fs::create_dir_all(project.artifacts()).unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn deployment(&self) -> PathBuf {
        self.root().join("deployments").join(NETWORK)
    }

    pub fn artifacts(&self) -> PathBuf {
        self.root().join("artifacts")
    }

    pub fn options(&self) -> CheckOptions {
        CheckOptions { artifacts_root: self.artifacts(), ..Default::default() }
    }

    /// Writes `deployments/<network>/<name>` with the given bytecode.
    pub fn descriptor(&self, name: &str, bytecode: &str) -> &Self {
        let content = serde_json::json!({
            "address": "0x0000000000000000000000000000000000000001",
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": format!("{bytecode}00"),
        });
        self.raw_descriptor(name, &content.to_string())
    }

    pub fn raw_descriptor(&self, name: &str, content: &str) -> &Self {
        fs::write(self.deployment().join(name), content).unwrap();
        self
    }

    /// Writes `artifacts/contracts/<contract>.sol/<contract>.json` and its `.dbg.json`.
    pub fn artifact(&self, contract: &str, bytecode: &str) -> &Self {
        let content = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": contract,
            "sourceName": format!("contracts/{contract}.sol"),
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": format!("{bytecode}00"),
        });
        let rel = format!("contracts/{contract}.sol/{contract}.json");
        self.raw_artifact(&rel, &content.to_string());
        let dbg = format!("contracts/{contract}.sol/{contract}.dbg.json");
        self.raw_artifact(&dbg, r#"{"_format":"hh-sol-dbg-1","buildInfo":"../../build-info/x.json"}"#)
    }

    pub fn raw_artifact(&self, rel: &str, content: &str) -> &Self {
        let path = self.artifacts().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }
}

/// Lines written to an output buffer.
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out).lines().map(str::to_string).collect()
}
