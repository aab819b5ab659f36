//! Mocks and fixtures shared by the unit tests.

use std::{
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use alloy::transports::TransportErrorKind;
use alloy_primitives::{Address, Bytes, TxHash, U256, address, keccak256};
use async_trait::async_trait;
use tempfile::TempDir;

use crate::{
    basic_elements::{abi::ContractInterface, keys::parse_private_key},
    client::{
        config_provider::{ConfigProvider, MapConfigProvider},
        connection::ConnectionConfig,
        node::{NodeClient, NodeConnector},
    },
    constants::{KEY_ACCOUNT_ADDRESS, KEY_NODE_URL, KEY_PRIVATE_KEY},
    error::{CallError, StartupError},
};

// First development account of anvil/hardhat.
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const TEST_CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

pub const TOKEN_ARTIFACT: &str = r#"{
  "contractName": "AniwarToken",
  "abi": [
    {
      "type": "function",
      "name": "balanceOf",
      "stateMutability": "view",
      "inputs": [{ "name": "account", "type": "address", "internalType": "address" }],
      "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
    },
    {
      "type": "function",
      "name": "totalSupply",
      "stateMutability": "view",
      "inputs": [],
      "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
    },
    {
      "type": "function",
      "name": "transfer",
      "stateMutability": "nonpayable",
      "inputs": [
        { "name": "recipient", "type": "address", "internalType": "address" },
        { "name": "amount", "type": "uint256", "internalType": "uint256" }
      ],
      "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
    },
    {
      "type": "event",
      "name": "Transfer",
      "anonymous": false,
      "inputs": [
        { "name": "from", "type": "address", "indexed": true, "internalType": "address" },
        { "name": "to", "type": "address", "indexed": true, "internalType": "address" },
        { "name": "value", "type": "uint256", "indexed": false, "internalType": "uint256" }
      ]
    }
  ],
  "bytecode": "0x"
}"#;

pub const DEPLOYMENT_MAP: &str = r#"{
  "4": {
    "AniwarToken": [
      "0x5FbDB2315678afecb367f032d93F642f64180aa3",
      "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
    ]
  }
}"#;

pub fn test_provider() -> MapConfigProvider {
    MapConfigProvider::new()
        .with(KEY_NODE_URL, "http://127.0.0.1:8545")
        .with(KEY_ACCOUNT_ADDRESS, &TEST_ACCOUNT.to_string())
        .with(KEY_PRIVATE_KEY, TEST_PRIVATE_KEY)
}

pub fn test_config(node: MockNode) -> ConnectionConfig {
    ConnectionConfig {
        node: Arc::new(node),
        account_address: TEST_ACCOUNT,
        signer: parse_private_key(TEST_PRIVATE_KEY).unwrap(),
        contract_address: TEST_CONTRACT,
        interface: ContractInterface::from_artifact(
            Path::new("AniwarToken.json"),
            TOKEN_ARTIFACT.as_bytes(),
        )
        .unwrap(),
    }
}

/// A temporary `chain-info` directory holding both artifacts.
pub struct ArtifactDir {
    dir: TempDir,
}

impl ArtifactDir {
    pub fn new() -> Self {
        let artifacts = Self::empty();
        artifacts.write("contracts/AniwarToken.json", TOKEN_ARTIFACT);
        artifacts.write("deployments/map.json", DEPLOYMENT_MAP);
        artifacts
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}

/// Scripted node. Clones share their counters.
#[derive(Clone, Default)]
pub struct MockNode {
    gas_price: u128,
    nonce: u64,
    chain_id: u64,
    call_result: Bytes,
    delay: Option<Duration>,
    nonce_delay: Option<Duration>,
    failure: Option<String>,
    rejection: Option<String>,
    pub queries: Arc<AtomicUsize>,
    pub submissions: Arc<AtomicUsize>,
    nonce_queries: Arc<Mutex<Vec<Address>>>,
    calls: Arc<Mutex<Vec<(Address, Address, U256, Bytes)>>>,
    submitted: Arc<Mutex<Vec<Bytes>>>,
}

impl MockNode {
    pub fn new() -> Self {
        Self {
            gas_price: 1_000_000_000,
            chain_id: 4,
            ..Self::default()
        }
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_call_result(mut self, result: impl Into<Bytes>) -> Self {
        self.call_result = result.into();
        self
    }

    /// Every query sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Only the pending nonce query sleeps this long.
    pub fn with_nonce_delay(mut self, delay: Duration) -> Self {
        self.nonce_delay = Some(delay);
        self
    }

    /// Every query fails with a transport error.
    pub fn failing_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn rejecting_submissions(mut self, message: &str) -> Self {
        self.rejection = Some(message.to_string());
        self
    }

    pub fn nonce_queries_for(&self, account: Address) -> usize {
        self.nonce_queries
            .lock()
            .unwrap()
            .iter()
            .filter(|queried| **queried == account)
            .count()
    }

    pub fn calls(&self) -> Vec<(Address, Address, U256, Bytes)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<Bytes> {
        self.submitted.lock().unwrap().clone()
    }

    async fn answer(&self) -> Result<(), CallError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(message) => Err(TransportErrorKind::custom_str(message).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NodeClient for MockNode {
    async fn suggest_gas_price(&self) -> Result<u128, CallError> {
        self.answer().await?;
        Ok(self.gas_price)
    }

    async fn pending_nonce_at(&self, account: Address) -> Result<u64, CallError> {
        self.nonce_queries.lock().unwrap().push(account);
        if let Some(delay) = self.nonce_delay {
            tokio::time::sleep(delay).await;
        }
        self.answer().await?;
        Ok(self.nonce)
    }

    async fn chain_id(&self) -> Result<u64, CallError> {
        self.answer().await?;
        Ok(self.chain_id)
    }

    async fn call_contract(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<Bytes, CallError> {
        self.calls.lock().unwrap().push((from, to, value, data));
        self.answer().await?;
        Ok(self.call_result.clone())
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, CallError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        self.answer().await?;
        if let Some(reason) = &self.rejection {
            return Err(CallError::Submission(reason.clone()));
        }
        let hash = keccak256(&raw);
        self.submitted.lock().unwrap().push(raw);
        Ok(hash)
    }
}

/// Connector handing out one shared [`MockNode`], counting dials.
pub struct MockConnector {
    node: MockNode,
    dial_delay: Duration,
    failures_left: AtomicUsize,
    pub dials: AtomicUsize,
}

impl MockConnector {
    pub fn new(node: MockNode) -> Self {
        Self {
            node,
            dial_delay: Duration::ZERO,
            failures_left: AtomicUsize::new(0),
            dials: AtomicUsize::new(0),
        }
    }

    pub fn with_dial_delay_ms(mut self, millis: u64) -> Self {
        self.dial_delay = Duration::from_millis(millis);
        self
    }

    /// The first `count` dials fail.
    pub fn failing_dials(self, count: usize) -> Self {
        self.failures_left.store(count, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl NodeConnector for MockConnector {
    async fn dial(&self, url: &str) -> Result<Arc<dyn NodeClient>, StartupError> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        if !self.dial_delay.is_zero() {
            tokio::time::sleep(self.dial_delay).await;
        }
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(StartupError::Dial {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(Arc::new(self.node.clone()))
    }
}

/// Wraps a provider and counts lookups.
pub struct CountingProvider {
    inner: MapConfigProvider,
    pub reads: AtomicUsize,
}

impl CountingProvider {
    pub fn new(inner: MapConfigProvider) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }
}

impl ConfigProvider for CountingProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }
}
