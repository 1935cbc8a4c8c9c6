// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
};
use typed_builder::TypedBuilder;

use crate::{
    core::artifact::{Artifact, ArtifactError},
    utils::color::{Color, DebugColor},
};

pub use request::{deployed_address, DeploymentRequest, GasEstimate};

pub mod request;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to deploy\n\
         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .required).red(),
    )]
    InsufficientFunds {
        from_address: Address,
        balance: U256,
        required: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in deployment receipt")]
    MissingReceiptAddress,
}

/// A contract confirmed on chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub chain_id: u64,
    pub gas_used: u64,
}

/// Puts compiled contracts on chain.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Deploys an artifact, waiting until the creation transaction is included.
    async fn deploy(
        &self,
        artifact: &Artifact,
        constructor_args: &[String],
    ) -> Result<Deployment, DeploymentError>;
}

/// Deploys contracts by sending creation transactions through a wallet-backed provider.
#[derive(TypedBuilder)]
pub struct NetworkDeployer<P> {
    provider: P,
    #[builder(default, setter(into))]
    max_fee_per_gas_wei: Option<u128>,
}

impl<P: Provider + WalletProvider> NetworkDeployer<P> {
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn request(
        &self,
        artifact: &Artifact,
        constructor_args: &[String],
    ) -> Result<DeploymentRequest, DeploymentError> {
        let init_code = artifact.init_code(constructor_args)?;
        Ok(DeploymentRequest::new(
            self.provider.default_signer_address(),
            init_code,
            self.max_fee_per_gas_wei,
        ))
    }

    /// Estimates what deploying an artifact would cost, without sending anything.
    pub async fn estimate(
        &self,
        artifact: &Artifact,
        constructor_args: &[String],
    ) -> Result<GasEstimate, DeploymentError> {
        self.request(artifact, constructor_args)?
            .estimate(&self.provider)
            .await
    }
}

impl<P: Provider + WalletProvider> Deployer for NetworkDeployer<P> {
    async fn deploy(
        &self,
        artifact: &Artifact,
        constructor_args: &[String],
    ) -> Result<Deployment, DeploymentError> {
        let from_address = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", from_address.debug_lavender());

        let req = self.request(artifact, constructor_args)?;
        let estimate = req.estimate(&self.provider).await?;

        // check balance early
        let balance = self
            .provider
            .get_balance(from_address)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        let required = estimate.total_cost();
        if balance < required {
            return Err(DeploymentError::InsufficientFunds {
                from_address,
                balance,
                required,
            });
        }

        let chain_id = self.provider.get_chain_id().await?;
        let receipt = req.exec(estimate, &self.provider).await?;
        let address = deployed_address(&receipt)?;

        info!(@grey, "deployed {} at address: {}", artifact.contract_name(), address.debug_lavender());
        debug!(@grey, "gas used: {}", receipt.gas_used.debug_lavender());
        info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

        Ok(Deployment {
            address,
            transaction_hash: receipt.transaction_hash,
            chain_id,
            gas_used: receipt.gas_used,
        })
    }
}
