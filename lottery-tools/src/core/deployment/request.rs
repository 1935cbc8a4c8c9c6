// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract-creation transaction requests.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Gas needed by a transaction, and the fee per gas it will pay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub max_fee_per_gas: u128,
}

impl GasEstimate {
    /// Upper bound of what the transaction can cost the sender, in wei.
    pub fn total_cost(&self) -> U256 {
        U256::from(self.gas) * U256::from(self.max_fee_per_gas)
    }
}

/// Deployment transaction request for a contract
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate(&self, provider: &impl Provider) -> Result<GasEstimate, DeploymentError> {
        let gas = provider.estimate_gas(self.tx.clone()).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;
        Ok(GasEstimate {
            gas,
            max_fee_per_gas,
        })
    }

    pub async fn exec(
        self,
        estimate: GasEstimate,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let mut tx = self.tx;
        tx.gas = Some(estimate.gas);
        tx.max_fee_per_gas = Some(estimate.max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        tx.get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}

/// Address of the contract created by a mined deployment transaction.
pub fn deployed_address(receipt: &TransactionReceipt) -> Result<Address, DeploymentError> {
    if !receipt.status() {
        return Err(DeploymentError::Reverted {
            tx_hash: receipt.transaction_hash,
        });
    }
    receipt
        .contract_address
        .ok_or(DeploymentError::MissingReceiptAddress)
}
