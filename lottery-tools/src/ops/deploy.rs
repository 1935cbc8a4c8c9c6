// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! One-off deployment of any artifact.

use std::io::Write;

use crate::{
    core::{
        deployment::Deployer,
        migration::{self, DeploymentResult},
        registry::ArtifactRegistry,
    },
    Result,
};

pub async fn deploy(
    name: &str,
    constructor_args: &[String],
    registry: &ArtifactRegistry,
    deployer: &impl Deployer,
    record: bool,
    out: &mut impl Write,
) -> Result<DeploymentResult> {
    let result =
        migration::deploy_contract(name, constructor_args, registry, deployer, out).await?;
    if record {
        super::record(registry, name, &result)?;
    }
    Ok(result)
}
