// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use lottery_tools::{core::migration::MIGRATIONS, ops};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ProviderArgs},
    error::MigrateResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Do not write the deployed addresses back into the artifacts.
    #[arg(long)]
    no_record: bool,

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
    // resolve every artifact before connecting
    for migration in MIGRATIONS {
        registry.require(migration.contract)?;
    }

    let deployer = args.provider.build_deployer(&args.auth).await?;
    if args.estimate_gas {
        for migration in MIGRATIONS {
            ops::estimate_gas(migration.contract, &[], &registry, &deployer).await?;
        }
        return Ok(());
    }

    ops::migrate(&registry, &deployer, !args.no_record, &mut io::stdout()).await?;
    Ok(())
}
