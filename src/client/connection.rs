use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::{
    basic_elements::{
        abi::ContractInterface,
        keys::{parse_address, parse_private_key},
    },
    client::{
        config_provider::ConfigProvider,
        node::{NodeClient, NodeConnector},
    },
    constants::{
        CONTRACTS_DIR, DEFAULT_CHAIN_ID, DEFAULT_CONTRACT_NAME, DEPLOYMENT_MAP_PATH,
        KEY_ACCOUNT_ADDRESS, KEY_CHAIN_ID, KEY_CONTRACT_NAME, KEY_NODE_URL, KEY_PRIVATE_KEY,
    },
    error::StartupError,
    helpers::deployments::resolve_address,
    types::deployment::DeploymentMap,
};

/// Everything a contract call needs. Built once, then shared read-only.
pub struct ConnectionConfig {
    pub node: Arc<dyn NodeClient>,
    pub account_address: Address,
    pub signer: PrivateKeySigner,
    pub contract_address: Address,
    pub interface: ContractInterface,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("account_address", &self.account_address)
            .field("signer", &self.signer.address())
            .field("contract_address", &self.contract_address)
            .finish_non_exhaustive()
    }
}

impl ConnectionConfig {
    /// Reads configuration, dials the node and loads both artifacts.
    pub async fn load(
        base_path: &Path,
        provider: &dyn ConfigProvider,
        connector: &dyn NodeConnector,
    ) -> Result<Self, StartupError> {
        let node_url = provider.require(KEY_NODE_URL)?;
        let account_address = parse_address(
            KEY_ACCOUNT_ADDRESS,
            &provider.require(KEY_ACCOUNT_ADDRESS)?,
        )?;
        let signer = parse_private_key(&provider.require(KEY_PRIVATE_KEY)?)?;
        let chain_id = provider.get_or(KEY_CHAIN_ID, DEFAULT_CHAIN_ID);
        let contract_name = provider.get_or(KEY_CONTRACT_NAME, DEFAULT_CONTRACT_NAME);

        let node = connector.dial(&node_url).await?;

        let (interface, deployments) = load_artifacts(base_path, &contract_name).await?;
        let contract_address = resolve_address(&deployments, &chain_id, &contract_name)?;

        info!(
            contract = %contract_name,
            %chain_id,
            %contract_address,
            %account_address,
            "contract connection ready"
        );

        Ok(Self {
            node,
            account_address,
            signer,
            contract_address,
            interface,
        })
    }

    /// Sender of every transaction, derived from the private key.
    pub fn sender(&self) -> Address {
        self.signer.address()
    }
}

pub fn contract_artifact_path(base_path: &Path, contract_name: &str) -> PathBuf {
    base_path
        .join(CONTRACTS_DIR)
        .join(format!("{contract_name}.json"))
}

pub fn deployment_map_path(base_path: &Path) -> PathBuf {
    base_path.join(DEPLOYMENT_MAP_PATH)
}

/// Loads the contract interface and the deployment map side by side. Both
/// loads always run to completion, and every failure is reported.
async fn load_artifacts(
    base_path: &Path,
    contract_name: &str,
) -> Result<(ContractInterface, DeploymentMap), StartupError> {
    let abi_path = contract_artifact_path(base_path, contract_name);
    let map_path = deployment_map_path(base_path);

    let (interface, deployments) = tokio::join!(
        async {
            let bytes = read_artifact(&abi_path).await?;
            ContractInterface::from_artifact(&abi_path, &bytes)
        },
        async {
            let bytes = read_artifact(&map_path).await?;
            DeploymentMap::from_json(&bytes).map_err(|source| StartupError::MalformedArtifact {
                path: map_path.clone(),
                source,
            })
        },
    );

    match (interface, deployments) {
        (Ok(interface), Ok(deployments)) => Ok((interface, deployments)),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
        (Err(abi_err), Err(map_err)) => Err(StartupError::Artifacts(vec![abi_err, map_err])),
    }
}

async fn read_artifact(path: &Path) -> Result<Vec<u8>, StartupError> {
    debug!(path = %path.display(), "reading artifact");
    tokio::fs::read(path)
        .await
        .map_err(|source| StartupError::ReadArtifact {
            path: path.to_path_buf(),
            source,
        })
}

/// Process-wide handle on the connection config. Built by the entry point and
/// handed to every service; the config itself is created on first use.
pub struct ContractContext {
    base_path: PathBuf,
    provider: Arc<dyn ConfigProvider>,
    connector: Arc<dyn NodeConnector>,
    config: OnceCell<Arc<ConnectionConfig>>,
}

impl ContractContext {
    pub fn new(
        base_path: impl Into<PathBuf>,
        provider: Arc<dyn ConfigProvider>,
        connector: Arc<dyn NodeConnector>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            provider,
            connector,
            config: OnceCell::new(),
        }
    }

    /// Returns the shared config, initializing it if needed.
    ///
    /// Exactly one initialization runs at a time; concurrent callers wait for
    /// it. A failed attempt caches nothing, so the next call starts over.
    pub async fn get_config(&self) -> Result<Arc<ConnectionConfig>, StartupError> {
        self.config
            .get_or_try_init(|| async {
                ConnectionConfig::load(
                    &self.base_path,
                    self.provider.as_ref(),
                    self.connector.as_ref(),
                )
                .await
                .map(Arc::new)
            })
            .await
            .cloned()
    }

    /// Builds the config ahead of the first request.
    ///
    /// A deployment miss is only logged: the contract layer stays unavailable
    /// and each request retries the lookup. Every other failure is returned.
    pub async fn warm_up(&self) -> Result<(), StartupError> {
        match self.get_config().await {
            Ok(_) => Ok(()),
            Err(StartupError::Deployment(err)) => {
                warn!(error = %err, "contract address unresolved, token calls unavailable");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.config.initialized()
    }
}
