// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use crate::{core::registry::ArtifactRegistry, Result};

/// Lists the deployments recorded in a contract's artifact.
pub fn networks(name: &str, registry: &ArtifactRegistry, out: &mut impl Write) -> Result<()> {
    let artifact = registry.require(name)?;
    if artifact.networks().is_empty() {
        writeln!(out, "no deployments recorded for {}", artifact.contract_name())?;
        return Ok(());
    }

    writeln!(out, "{}:", artifact.contract_name())?;
    for (chain_id, record) in artifact.networks() {
        match record.transaction_hash {
            Some(tx_hash) => writeln!(out, "  {chain_id}: {} (tx {tx_hash})", record.address)?,
            None => writeln!(out, "  {chain_id}: {}", record.address)?,
        }
    }
    Ok(())
}
