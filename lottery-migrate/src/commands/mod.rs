// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::MigrateResult;

mod deploy;
mod migrate;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the migrations, deploying the Lottery contract
    #[clap(visible_alias = "m")]
    Migrate(migrate::Args),
    /// Deploy a single contract artifact
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the deployments recorded in a contract artifact
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> MigrateResult {
    match cmd {
        Command::Migrate(args) => migrate::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
