// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Numbered deployment steps.

use std::{fmt, io::Write};

use alloy::primitives::{Address, TxHash};

use super::{deployment::Deployer, registry::ArtifactRegistry};
use crate::Result;

/// A single numbered deployment step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Migration {
    pub number: u32,
    pub name: &'static str,
    /// Artifact deployed by this step.
    pub contract: &'static str,
}

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.number, self.name)
    }
}

pub const DEPLOY_CONTRACTS: Migration = Migration {
    number: 2,
    name: "deploy_contracts",
    contract: "Lottery",
};

/// Every migration, in the order they run.
pub const MIGRATIONS: &[Migration] = &[DEPLOY_CONTRACTS];

/// Outcome of a successful deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
    pub contract_name: String,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub chain_id: u64,
}

impl fmt::Display for DeploymentResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} deployed to: {}", self.contract_name, self.address)
    }
}

/// Deploys a contract artifact with the given constructor arguments and writes one
/// `<Name> deployed to: <address>` line to `out`.
///
/// Nothing is written unless the deployment succeeds.
pub async fn deploy_contract(
    name: &str,
    constructor_args: &[String],
    registry: &ArtifactRegistry,
    deployer: &impl Deployer,
    out: &mut impl Write,
) -> Result<DeploymentResult> {
    let artifact = registry.require(name)?;
    let deployment = deployer.deploy(&artifact, constructor_args).await?;

    let result = DeploymentResult {
        contract_name: artifact.contract_name().to_owned(),
        address: deployment.address,
        transaction_hash: deployment.transaction_hash,
        chain_id: deployment.chain_id,
    };
    writeln!(out, "{result}")?;
    Ok(result)
}

/// Runs one migration: deploys its contract with no constructor arguments.
pub async fn run(
    migration: &Migration,
    registry: &ArtifactRegistry,
    deployer: &impl Deployer,
    out: &mut impl Write,
) -> Result<DeploymentResult> {
    debug!(@grey, "running migration {migration}");
    deploy_contract(migration.contract, &[], registry, deployer, out).await
}
