// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{
    utils::{format_units, UnitsError},
    U256,
};
use color::Color;

pub mod color;

#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    #[error("max fee per gas must be non-negative")]
    Negative,
    #[error("invalid max fee per gas value: {0}")]
    Invalid(String),
    #[error("result outside valid range for wei")]
    OutOfRange,
}

/// Converts a gwei amount, as typed by a user, into wei.
pub fn convert_gwei_to_wei(fee_str: &str) -> Result<u128, FeeError> {
    let gwei = match fee_str.trim().parse::<f64>() {
        Ok(fee) if fee.is_finite() && fee >= 0.0 => fee,
        Ok(fee) if fee < 0.0 => return Err(FeeError::Negative),
        _ => return Err(FeeError::Invalid(fee_str.to_owned())),
    };

    let wei = gwei * 1e9;
    if !wei.is_finite() || wei >= u128::MAX as f64 {
        return Err(FeeError::OutOfRange);
    }
    Ok(wei as u128)
}

/// Pretty-prints a total transaction cost in ETH.
pub fn format_eth_cost(cost: U256) -> Result<String, UnitsError> {
    let text = format!("{} ETH", format_units(cost, "ether")?);
    // 0.005 ETH
    let threshold = U256::from(5_000_000_000_000_000u64);
    Ok(if cost <= threshold {
        text.mint()
    } else {
        text.yellow()
    })
}

pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}
