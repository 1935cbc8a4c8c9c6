// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use deploy::deploy;
pub use estimate::estimate_gas;
pub use migrate::migrate;
pub use networks::networks;

mod deploy;
mod estimate;
mod migrate;
mod networks;

use crate::{
    core::{artifact::NetworkRecord, migration::DeploymentResult, registry::ArtifactRegistry},
    Error, Result,
};

/// Writes a deployment into the artifact of the contract it came from.
fn record(registry: &ArtifactRegistry, name: &str, result: &DeploymentResult) -> Result<()> {
    let record = NetworkRecord {
        address: result.address,
        transaction_hash: Some(result.transaction_hash),
    };
    registry
        .record_deployment(name, result.chain_id, &record)
        .map_err(|source| Error::Unrecorded {
            contract: name.to_owned(),
            address: result.address,
            source,
        })
}
