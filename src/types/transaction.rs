use alloy::{
    consensus::{Signed, TxEnvelope, TxLegacy},
    eips::eip2718::Encodable2718,
};
use alloy_primitives::{Address, Bytes, TxHash, TxKind, U256};

use crate::error::CallError;

/// Unsigned state-changing call, built fresh for every send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub nonce: u64,
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub data: Bytes,
}

impl PendingTransaction {
    /// Legacy transaction carrying `chain_id` for EIP-155 replay protection.
    pub fn into_legacy(self, chain_id: u64) -> TxLegacy {
        TxLegacy {
            chain_id: Some(chain_id),
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            to: TxKind::Call(self.to),
            value: self.value,
            input: self.data,
        }
    }
}

/// A transaction signed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedTransaction {
    inner: Signed<TxLegacy>,
}

impl SignedTransaction {
    pub fn new(inner: Signed<TxLegacy>) -> Self {
        Self { inner }
    }

    pub fn hash(&self) -> TxHash {
        *self.inner.hash()
    }

    pub fn tx(&self) -> &TxLegacy {
        self.inner.tx()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.inner.tx().chain_id
    }

    /// Recovers the sender address from the signature.
    pub fn recover_sender(&self) -> Result<Address, CallError> {
        self.inner
            .recover_signer()
            .map_err(|e| CallError::Signing(e.to_string()))
    }

    /// Raw bytes accepted by `eth_sendRawTransaction`.
    pub fn raw(&self) -> Bytes {
        TxEnvelope::from(self.inner.clone()).encoded_2718().into()
    }
}
