// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Two on-disk layouts are understood: Truffle build artifacts, where `bytecode` is a hex string,
//! and Foundry artifacts, where the hex string lives under `bytecode.object`. Both carry the
//! contract's JSON ABI, which is used to encode constructor arguments.

use std::{collections::BTreeMap, path::PathBuf, sync::LazyLock};

use alloy::{
    dyn_abi::{JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::{Address, Bytes, TxHash},
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::decode0x;

/// Library link placeholders left in bytecode by solc (`__$<hash>$__`) and by older
/// toolchains (`__LibName_____`). Both are 40 characters wide.
static LINK_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__[$A-Za-z0-9_.:/]{36}__").expect("link placeholder pattern is valid")
});

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not find artifact for {name:?} in {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("artifact for {0} has no bytecode (is it an interface or abstract contract?)")]
    MissingBytecode(String),
    #[error("bytecode of {name} has an unlinked library placeholder {placeholder}")]
    UnlinkedLibrary { name: String, placeholder: String },
    #[error("bytecode of {name} is not valid hex: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
    #[error("malformed artifact {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Where a contract was deployed on one chain.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
}

/// A compiled contract, ready to be deployed.
#[derive(Clone, Debug)]
pub struct Artifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: Bytes,
    networks: BTreeMap<String, NetworkRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    #[serde(default)]
    abi: JsonAbi,
    bytecode: Option<RawBytecode>,
    #[serde(default)]
    networks: BTreeMap<String, NetworkRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn hex(&self) -> &str {
        match self {
            Self::Hex(hex) => hex,
            Self::Object { object } => object,
        }
    }
}

impl Artifact {
    /// Parses an artifact file's contents, using `name` when the file does not carry its own
    /// contract name.
    pub fn from_json(name: &str, json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let contract_name = raw.contract_name.unwrap_or_else(|| name.to_owned());
        if contract_name != name {
            warn!(@yellow, "artifact for {name} declares contract name {contract_name}");
        }

        let hex = raw.bytecode.as_ref().map(RawBytecode::hex).unwrap_or("");
        let hex = hex.trim();
        if hex.is_empty() || hex == "0x" {
            return Err(ArtifactError::MissingBytecode(contract_name));
        }
        if let Some(placeholder) = LINK_PLACEHOLDER.find(hex) {
            return Err(ArtifactError::UnlinkedLibrary {
                name: contract_name,
                placeholder: placeholder.as_str().to_owned(),
            });
        }
        let bytecode = match decode0x(hex) {
            Ok(bytes) => Bytes::from(bytes),
            Err(source) => {
                return Err(ArtifactError::InvalidBytecode {
                    name: contract_name,
                    source,
                })
            }
        };

        Ok(Self {
            contract_name,
            abi: raw.abi,
            bytecode,
            networks: raw.networks,
        })
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation bytecode, without constructor arguments.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Deployments recorded in the artifact, keyed by chain id.
    pub fn networks(&self) -> &BTreeMap<String, NetworkRecord> {
        &self.networks
    }

    /// Builds the contract-creation input: the bytecode followed by the ABI-encoded constructor
    /// arguments, each parsed from its string form using the constructor's parameter types.
    pub fn init_code(&self, args: &[String]) -> Result<Bytes, ArtifactError> {
        let Some(constructor) = &self.abi.constructor else {
            if !args.is_empty() {
                return Err(ArtifactError::InvalidConstructor(format!(
                    "{} has no constructor but {} arguments were given",
                    self.contract_name,
                    args.len(),
                )));
            }
            return Ok(self.bytecode.clone());
        };
        if args.len() != constructor.inputs.len() {
            return Err(ArtifactError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want {} ({}); got {})",
                constructor
                    .inputs
                    .iter()
                    .map(|param| param.ty.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                constructor.inputs.len(),
                args.len(),
            )));
        }

        let mut values = Vec::with_capacity(args.len());
        for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
            let ty = param.resolve().map_err(|err| {
                ArtifactError::InvalidConstructor(format!(
                    "could not resolve constructor arg {}: {err}",
                    param.name
                ))
            })?;
            let value = ty.coerce_str(arg).map_err(|err| {
                ArtifactError::InvalidConstructor(format!(
                    "could not parse constructor arg {}: {err}",
                    param.name
                ))
            })?;
            values.push(value);
        }
        let encoded = constructor
            .abi_encode_input(&values)
            .map_err(|err| ArtifactError::InvalidConstructor(err.to_string()))?;

        let mut code = self.bytecode.to_vec();
        code.extend(encoded);
        Ok(code.into())
    }
}
