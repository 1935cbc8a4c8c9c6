// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Resolve contract artifacts by name from a build directory.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::artifact::{Artifact, ArtifactError, NetworkRecord};

/// Default location of Truffle build artifacts, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build/contracts";

#[derive(Clone, Debug)]
pub struct ArtifactRegistry {
    dir: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Finds the artifact file for a contract.
    ///
    /// Looks for `<dir>/<name>.json` (Truffle) first, then `<dir>/<name>.sol/<name>.json`
    /// (Foundry).
    pub fn locate(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let not_found = || ArtifactError::NotFound {
            name: name.to_owned(),
            dir: self.dir.clone(),
        };
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(not_found());
        }

        [
            self.dir.join(format!("{name}.json")),
            self.dir.join(format!("{name}.sol")).join(format!("{name}.json")),
        ]
        .into_iter()
        .find(|path| path.is_file())
        .ok_or_else(not_found)
    }

    /// Loads and validates the artifact for a contract.
    pub fn require(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.locate(name)?;
        debug!(@grey, "loading artifact for {name} from {}", path.display());
        let json = fs::read_to_string(&path)?;
        Artifact::from_json(name, &json)
    }

    /// Stores a deployment under `networks.<chain_id>` in the contract's artifact.
    ///
    /// Every other field of the artifact is left as it was, including any extra keys in an
    /// existing record for the same chain.
    pub fn record_deployment(
        &self,
        name: &str,
        chain_id: u64,
        record: &NetworkRecord,
    ) -> Result<(), ArtifactError> {
        let path = self.locate(name)?;
        let malformed = |reason: &str| ArtifactError::Malformed {
            path: path.clone(),
            reason: reason.to_owned(),
        };

        let mut artifact: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let networks = artifact
            .as_object_mut()
            .ok_or_else(|| malformed("not a json object"))?
            .entry("networks")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| malformed("networks is not a json object"))?;

        let Value::Object(fields) = serde_json::to_value(record)? else {
            return Err(malformed("network record is not a json object"));
        };
        match networks.get_mut(&chain_id.to_string()) {
            Some(Value::Object(existing)) => {
                // a redeploy on the same chain must not keep the old tx hash
                existing.remove("transactionHash");
                existing.extend(fields);
            }
            _ => {
                networks.insert(chain_id.to_string(), Value::Object(fields));
            }
        }

        let mut json = serde_json::to_string_pretty(&artifact)?;
        json.push('\n');

        // replace the artifact whole or not at all
        let dir = path.parent().unwrap_or(&self.dir);
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|err| err.error)?;
        debug!(@grey, "recorded {name} on chain {chain_id} in {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};

    use super::*;
    use crate::core::artifact::tests::{truffle_json, BYTECODE};

    #[test]
    fn requires_truffle_layout() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Lottery.json"), truffle_json("Lottery")).unwrap();

        let registry = ArtifactRegistry::new(dir.path());
        let artifact = registry.require("Lottery").unwrap();
        assert_eq!(artifact.contract_name(), "Lottery");
    }

    #[test]
    fn requires_foundry_layout() {
        let dir = tempfile::tempdir().unwrap();
        let contract_dir = dir.path().join("Lottery.sol");
        fs::create_dir(&contract_dir).unwrap();
        let json = serde_json::json!({ "abi": [], "bytecode": { "object": BYTECODE } });
        fs::write(contract_dir.join("Lottery.json"), json.to_string()).unwrap();

        let registry = ArtifactRegistry::new(dir.path());
        let path = registry.locate("Lottery").unwrap();
        assert!(path.ends_with("Lottery.sol/Lottery.json"));
        assert_eq!(registry.require("Lottery").unwrap().contract_name(), "Lottery");
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ArtifactRegistry::new(dir.path());
        for name in ["Lottery", "", "../Lottery"] {
            let err = registry.require(name).unwrap_err();
            assert!(matches!(err, ArtifactError::NotFound { .. }), "{name}: {err}");
        }
    }

    #[test]
    fn records_deployment_preserving_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lottery.json");
        fs::write(&path, truffle_json("Lottery")).unwrap();
        let registry = ArtifactRegistry::new(dir.path());

        let record = NetworkRecord {
            address: address!("00000000000000000000000000000000000abc12"),
            transaction_hash: Some(b256!(
                "1111111111111111111111111111111111111111111111111111111111111111"
            )),
        };
        registry.record_deployment("Lottery", 5777, &record).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["compiler"]["version"], "0.8.19");
        assert_eq!(value["bytecode"], BYTECODE);
        let artifact = registry.require("Lottery").unwrap();
        assert_eq!(artifact.networks()["5777"], record);

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["Lottery.json"]);
    }

    #[test]
    fn redeploy_overwrites_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lottery.json");
        let json = serde_json::json!({
            "contractName": "Lottery",
            "abi": [],
            "bytecode": BYTECODE,
            "networks": {
                "5777": {
                    "links": { "RandomLib": "0x0000000000000000000000000000000000000009" },
                    "address": "0x0000000000000000000000000000000000000001",
                    "transactionHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
                }
            },
        });
        fs::write(&path, json.to_string()).unwrap();
        let registry = ArtifactRegistry::new(dir.path());

        let record = NetworkRecord {
            address: address!("0000000000000000000000000000000000000002"),
            transaction_hash: None,
        };
        registry.record_deployment("Lottery", 5777, &record).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entry = &value["networks"]["5777"];
        assert!(entry["links"]["RandomLib"].is_string());
        assert!(entry.get("transactionHash").is_none());
        assert_eq!(registry.require("Lottery").unwrap().networks()["5777"], record);
    }

    #[test]
    fn rejects_malformed_networks() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::json!({ "contractName": "Lottery", "bytecode": BYTECODE, "networks": [] });
        fs::write(dir.path().join("Lottery.json"), json.to_string()).unwrap();
        let registry = ArtifactRegistry::new(dir.path());

        let record = NetworkRecord {
            address: address!("0000000000000000000000000000000000000002"),
            transaction_hash: None,
        };
        let before = fs::read(dir.path().join("Lottery.json")).unwrap();
        let err = registry.record_deployment("Lottery", 1, &record).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));

        assert_eq!(fs::read(dir.path().join("Lottery.json")).unwrap(), before);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
