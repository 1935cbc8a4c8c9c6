// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run the migrations.

use std::io::Write;

use crate::{
    core::{
        deployment::Deployer,
        migration::{self, DeploymentResult, MIGRATIONS},
        registry::ArtifactRegistry,
    },
    Result,
};

/// Runs every migration in order, stopping at the first failure.
///
/// Successful deployments are written back into their artifacts when `record` is set.
pub async fn migrate(
    registry: &ArtifactRegistry,
    deployer: &impl Deployer,
    record: bool,
    out: &mut impl Write,
) -> Result<Vec<DeploymentResult>> {
    let mut results = Vec::with_capacity(MIGRATIONS.len());
    for migration in MIGRATIONS {
        info!(@grey, "running migration {migration}");
        let result = migration::run(migration, registry, deployer, out).await?;
        if record {
            super::record(registry, migration.contract, &result)?;
        }
        results.push(result);
    }
    Ok(results)
}
