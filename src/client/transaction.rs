use alloy::{
    consensus::SignableTransaction, network::TxSignerSync, signers::local::PrivateKeySigner,
};
use alloy_primitives::{TxHash, U256};
use tracing::{debug, warn};

use crate::{
    basic_elements::args::Args,
    client::connection::ConnectionConfig,
    constants::{CALL_TIMEOUT, GAS_LIMIT},
    error::CallError,
    types::transaction::{PendingTransaction, SignedTransaction},
};

/// Builds and signs a state-changing call of `method_name`. Nothing is
/// submitted; see [`submit`].
///
/// Gas price, pending nonce and chain id are fetched concurrently under one
/// [`CALL_TIMEOUT`] deadline. Two concurrent sends from the same account can
/// receive the same pending nonce; only the node arbitrates between them.
pub async fn send_method(
    config: &ConnectionConfig,
    method_name: &str,
    value_in_wei: U256,
    args: &Args,
) -> Result<SignedTransaction, CallError> {
    let sender = config.sender();
    let data = config.interface.encode_call(method_name, args.values())?;

    let node = config.node.as_ref();
    let (gas_price, nonce, chain_id) = tokio::time::timeout(CALL_TIMEOUT, async {
        tokio::try_join!(
            node.suggest_gas_price(),
            node.pending_nonce_at(sender),
            node.chain_id(),
        )
    })
    .await
    .map_err(|_| CallError::Timeout(CALL_TIMEOUT))??;

    let pending = PendingTransaction {
        nonce,
        to: config.contract_address,
        value: value_in_wei,
        gas_limit: GAS_LIMIT,
        gas_price,
        data,
    };

    let signed = sign_transaction(pending, chain_id, &config.signer)?;
    debug!(
        method = method_name,
        nonce,
        gas_price,
        chain_id,
        hash = %signed.hash(),
        "signed transaction"
    );
    Ok(signed)
}

/// Signs `pending` for `chain_id` (EIP-155).
pub fn sign_transaction(
    pending: PendingTransaction,
    chain_id: u64,
    signer: &PrivateKeySigner,
) -> Result<SignedTransaction, CallError> {
    let mut tx = pending.into_legacy(chain_id);
    let signature = signer
        .sign_transaction_sync(&mut tx)
        .map_err(|e| CallError::Signing(e.to_string()))?;
    Ok(SignedTransaction::new(tx.into_signed(signature)))
}

/// Submits a signed transaction. Rejections by the node, e.g. when the fixed
/// gas limit is too low, are returned as [`CallError::Submission`].
pub async fn submit(
    config: &ConnectionConfig,
    signed: &SignedTransaction,
) -> Result<TxHash, CallError> {
    let hash = tokio::time::timeout(CALL_TIMEOUT, config.node.send_raw_transaction(signed.raw()))
        .await
        .map_err(|_| CallError::Timeout(CALL_TIMEOUT))?
        .inspect_err(|e| warn!(hash = %signed.hash(), error = %e, "transaction rejected"))?;
    debug!(%hash, "transaction submitted");
    Ok(hash)
}

/// [`send_method`] followed by [`submit`].
pub async fn send_and_submit(
    config: &ConnectionConfig,
    method_name: &str,
    value_in_wei: U256,
    args: &Args,
) -> Result<(SignedTransaction, TxHash), CallError> {
    let signed = send_method(config, method_name, value_in_wei, args).await?;
    let hash = submit(config, &signed).await?;
    Ok((signed, hash))
}
