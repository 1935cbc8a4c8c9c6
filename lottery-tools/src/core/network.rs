// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named networks a migration can target.
//!
//! Networks are declared in a TOML file, `migrations.toml` by default:
//!
//! ```toml
//! [networks.development]
//! endpoint = "http://localhost:8545"
//! chain_id = 1337
//!
//! [networks.sepolia]
//! endpoint = "https://rpc.sepolia.org"
//! chain_id = 11155111
//! max_fee_per_gas_gwei = "2.5"
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::utils::{color::Color, convert_gwei_to_wei, FeeError};

/// The endpoint used when no network is selected.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Default name of the networks file, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "migrations.toml";

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("unknown network {}, known networks: {known}", .name.red())]
    UnknownNetwork { name: String, known: String },
    #[error("network {name}: {source}")]
    InvalidFee { name: String, source: FeeError },
    #[error("connected to chain {actual} but the network is configured for chain {expected}")]
    ChainIdMismatch { expected: u64, actual: u64 },
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationsConfig {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub endpoint: String,
    pub chain_id: Option<u64>,
    pub max_fee_per_gas_gwei: Option<GweiAmount>,
}

/// A gwei amount, written either as a number or as a string.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GweiAmount {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl MigrationsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, NetworkError> {
        Ok(toml::from_str(text)?)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, NetworkError> {
        self.networks
            .get(name)
            .ok_or_else(|| NetworkError::UnknownNetwork {
                name: name.to_owned(),
                known: self
                    .networks
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl NetworkConfig {
    /// Max fee per gas in wei, if the network sets one.
    pub fn max_fee_per_gas_wei(&self, name: &str) -> Result<Option<u128>, NetworkError> {
        let Some(amount) = &self.max_fee_per_gas_gwei else {
            return Ok(None);
        };
        let text = match amount {
            GweiAmount::Integer(gwei) => gwei.to_string(),
            GweiAmount::Float(gwei) => gwei.to_string(),
            GweiAmount::Text(gwei) => gwei.clone(),
        };
        convert_gwei_to_wei(&text)
            .map(Some)
            .map_err(|source| NetworkError::InvalidFee {
                name: name.to_owned(),
                source,
            })
    }
}

/// Makes sure the endpoint serves the chain a network was configured for.
pub fn check_chain_id(expected: Option<u64>, actual: u64) -> Result<(), NetworkError> {
    match expected {
        Some(expected) if expected != actual => {
            Err(NetworkError::ChainIdMismatch { expected, actual })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [networks.development]
        endpoint = "http://localhost:8545"
        chain_id = 1337

        [networks.sepolia]
        endpoint = "https://rpc.sepolia.org"
        chain_id = 11155111
        max_fee_per_gas_gwei = "2.5"

        [networks.fixed]
        endpoint = "http://localhost:9545"
        max_fee_per_gas_gwei = 3
    "#;

    #[test]
    fn looks_up_networks() {
        let config = MigrationsConfig::parse(CONFIG).unwrap();
        let dev = config.network("development").unwrap();
        assert_eq!(dev.endpoint, "http://localhost:8545");
        assert_eq!(dev.chain_id, Some(1337));
        assert_eq!(dev.max_fee_per_gas_wei("development").unwrap(), None);

        let sepolia = config.network("sepolia").unwrap();
        assert_eq!(
            sepolia.max_fee_per_gas_wei("sepolia").unwrap(),
            Some(2_500_000_000)
        );
        let fixed = config.network("fixed").unwrap();
        assert_eq!(fixed.chain_id, None);
        assert_eq!(
            fixed.max_fee_per_gas_wei("fixed").unwrap(),
            Some(3_000_000_000)
        );
    }

    #[test]
    fn unknown_network_lists_known_ones() {
        let config = MigrationsConfig::parse(CONFIG).unwrap();
        let err = config.network("mainnet").unwrap_err();
        match err {
            NetworkError::UnknownNetwork { name, known } => {
                assert_eq!(name, "mainnet");
                assert_eq!(known, "development, fixed, sepolia");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_config() {
        assert!(MigrationsConfig::parse("[networks.dev]\nchain_id = 1").is_err());
        assert!(MigrationsConfig::parse("[networks.dev]\nendpoint = \"x\"\nport = 1").is_err());

        let config =
            MigrationsConfig::parse("[networks.dev]\nendpoint = \"x\"\nmax_fee_per_gas_gwei = \"-1\"")
                .unwrap();
        let err = config
            .network("dev")
            .unwrap()
            .max_fee_per_gas_wei("dev")
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidFee { .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, CONFIG).unwrap();
        let config = MigrationsConfig::load(&path).unwrap();
        assert_eq!(config.networks.len(), 3);

        let err = MigrationsConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }

    #[test]
    fn checks_chain_id() {
        assert!(check_chain_id(None, 1).is_ok());
        assert!(check_chain_id(Some(1), 1).is_ok());
        assert!(matches!(
            check_chain_id(Some(1337), 1),
            Err(NetworkError::ChainIdMismatch {
                expected: 1337,
                actual: 1
            })
        ));
    }
}
