// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::core::{artifact::ArtifactError, deployment::DeploymentError, network::NetworkError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure of a migration run.
///
/// A migration does not distinguish between these: whichever step fails aborts the run and the
/// error is handed back to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("units error: {0}")]
    Units(#[from] alloy::primitives::utils::UnitsError),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Network(#[from] NetworkError),

    /// The contract is on chain but its artifact does not record it.
    #[error(
        "{contract} was deployed to {address} but the deployment could not be recorded: {source}\n\
         add the address to the artifact's networks by hand instead of redeploying"
    )]
    Unrecorded {
        contract: String,
        address: Address,
        source: ArtifactError,
    },
}
