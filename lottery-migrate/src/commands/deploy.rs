// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use lottery_tools::ops;

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ProviderArgs},
    error::MigrateResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract artifact to deploy.
    contract: String,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Do not write the deployed address back into the artifact.
    #[arg(long)]
    no_record: bool,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MigrateResult {
    let registry = args.artifacts.registry();
    let artifact = registry.require(&args.contract)?;
    // fail on bad arguments before connecting
    artifact.init_code(&args.constructor_args)?;

    let deployer = args.provider.build_deployer(&args.auth).await?;
    if args.estimate_gas {
        ops::estimate_gas(&args.contract, &args.constructor_args, &registry, &deployer).await?;
        return Ok(());
    }

    ops::deploy(
        &args.contract,
        &args.constructor_args,
        &registry,
        &deployer,
        !args.no_record,
        &mut io::stdout(),
    )
    .await?;
    Ok(())
}
