use std::sync::Arc;

use alloy::{
    eips::BlockId,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::eth::{TransactionInput, TransactionRequest},
};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::{
    constants::CALL_TIMEOUT,
    error::{CallError, StartupError},
};

/// The node queries the contract layer relies on.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Suggested gas price, in wei.
    async fn suggest_gas_price(&self) -> Result<u128, CallError>;

    /// Next nonce of `account`, counting transactions still in the mempool.
    async fn pending_nonce_at(&self, account: Address) -> Result<u64, CallError>;

    async fn chain_id(&self) -> Result<u64, CallError>;

    /// Executes a read-only call at the latest block.
    async fn call_contract(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<Bytes, CallError>;

    /// Submits a signed, EIP-2718 encoded transaction.
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, CallError>;
}

/// Opens node endpoints. Called once per process by the connection config.
#[async_trait]
pub trait NodeConnector: Send + Sync {
    async fn dial(&self, url: &str) -> Result<Arc<dyn NodeClient>, StartupError>;
}

/// JSON-RPC node reached over HTTP.
#[derive(Clone)]
pub struct EthereumNode {
    provider: DynProvider,
}

impl EthereumNode {
    pub fn new(url: &str) -> Result<Self, StartupError> {
        let rpc_url = Url::parse(url).map_err(|e| StartupError::Dial {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        Ok(Self { provider })
    }
}

#[async_trait]
impl NodeClient for EthereumNode {
    async fn suggest_gas_price(&self) -> Result<u128, CallError> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn pending_nonce_at(&self, account: Address) -> Result<u64, CallError> {
        Ok(self.provider.get_transaction_count(account).pending().await?)
    }

    async fn chain_id(&self) -> Result<u64, CallError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn call_contract(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<Bytes, CallError> {
        let tx = TransactionRequest::default()
            .from(from)
            .to(to)
            .value(value)
            .input(TransactionInput::new(data));
        Ok(self.provider.call(tx).block(BlockId::latest()).await?)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, CallError> {
        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .map_err(|e| CallError::Submission(e.to_string()))?;
        Ok(*pending.tx_hash())
    }
}

/// Dials HTTP endpoints and checks that a node answers before handing the
/// connection out.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

#[async_trait]
impl NodeConnector for HttpConnector {
    async fn dial(&self, url: &str) -> Result<Arc<dyn NodeClient>, StartupError> {
        let node = EthereumNode::new(url)?;

        let chain_id = tokio::time::timeout(CALL_TIMEOUT, node.chain_id())
            .await
            .map_err(|_| StartupError::Dial {
                url: url.to_string(),
                reason: format!("no answer within {CALL_TIMEOUT:?}"),
            })?
            .map_err(|e| StartupError::Dial {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        info!(%url, chain_id, "connected to node");
        Ok(Arc::new(node))
    }
}
