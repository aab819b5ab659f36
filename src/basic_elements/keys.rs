use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;

use crate::error::StartupError;

pub const HEX_PREFIX: &str = "0x";

/// Parses a hex-encoded secp256k1 private key, with or without `0x`.
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, StartupError> {
    let key = key.trim();
    let key = key.strip_prefix(HEX_PREFIX).unwrap_or(key);
    PrivateKeySigner::from_str(key).map_err(StartupError::InvalidPrivateKey)
}

/// Parses a configured account or contract address.
pub fn parse_address(config_key: &str, value: &str) -> Result<Address, StartupError> {
    Address::from_str(value.trim()).map_err(|e| StartupError::InvalidValue {
        key: config_key.to_string(),
        reason: e.to_string(),
    })
}
