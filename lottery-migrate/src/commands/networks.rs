// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use lottery_tools::ops;

use crate::{common_args::ArtifactArgs, error::MigrateResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract artifact.
    #[arg(default_value = "Lottery")]
    contract: String,

    #[command(flatten)]
    artifacts: ArtifactArgs,
}

pub fn exec(args: Args) -> MigrateResult {
    let registry = args.artifacts.registry();
    ops::networks(&args.contract, &registry, &mut io::stdout())?;
    Ok(())
}
