// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::utils::format_units,
    providers::{Provider, WalletProvider},
};

use crate::{
    core::{
        deployment::{GasEstimate, NetworkDeployer},
        registry::ArtifactRegistry,
    },
    utils::{color::DebugColor, format_eth_cost},
    Result,
};

/// Prints what deploying an artifact would cost, without sending a transaction.
pub async fn estimate_gas<P: Provider + WalletProvider>(
    name: &str,
    constructor_args: &[String],
    registry: &ArtifactRegistry,
    deployer: &NetworkDeployer<P>,
) -> Result<GasEstimate> {
    let artifact = registry.require(name)?;
    let estimate = deployer.estimate(&artifact, constructor_args).await?;

    greyln!("estimates for {}", artifact.contract_name());
    greyln!("deployment tx gas: {}", estimate.gas.debug_lavender());
    greyln!(
        "gas price: {} gwei",
        format_units(estimate.max_fee_per_gas, "gwei")?.debug_lavender()
    );
    greyln!(
        "deployment tx total cost: {}",
        format_eth_cost(estimate.total_cost())?
    );

    Ok(estimate)
}
