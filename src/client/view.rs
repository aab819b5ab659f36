use alloy_primitives::U256;
use tracing::debug;

use crate::{
    basic_elements::{args::Args, next_arg::DecodedValues},
    client::connection::ConnectionConfig,
    constants::CALL_TIMEOUT,
    error::CallError,
};

/// Calls a read-only method and decodes its outputs. No transaction is
/// created and no gas is spent; the configured account is the apparent sender.
pub async fn call_view(
    config: &ConnectionConfig,
    method_name: &str,
    value_in_wei: U256,
    args: &Args,
) -> Result<DecodedValues, CallError> {
    let method = config.interface.method(method_name, args.len())?;
    let data = method.encode_input(args.values())?;

    let raw = tokio::time::timeout(
        CALL_TIMEOUT,
        config.node.call_contract(
            config.account_address,
            config.contract_address,
            value_in_wei,
            data,
        ),
    )
    .await
    .map_err(|_| CallError::Timeout(CALL_TIMEOUT))??;

    debug!(method = method_name, bytes = raw.len(), "view call returned");
    method.decode_output(&raw)
}
