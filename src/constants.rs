use std::time::Duration;

/// Fixed gas limit of every state-changing call, in gas units. Not estimated.
pub const GAS_LIMIT: u64 = 3_000_000;

/// Deadline shared by all node queries issued for one call.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(2);

pub const DEFAULT_CHAIN_ID: &str = "4";
pub const DEFAULT_CONTRACT_NAME: &str = "AniwarToken";
pub const DEFAULT_CHAIN_INFO_DIR: &str = "chain-info";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 50001;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const CONTRACTS_DIR: &str = "contracts";
pub const DEPLOYMENT_MAP_PATH: &str = "deployments/map.json";

// Configuration provider keys
pub const KEY_HOST: &str = "host";
pub const KEY_PORT: &str = "port";
pub const KEY_NODE_URL: &str = "nodeUrl";
pub const KEY_PRIVATE_KEY: &str = "privateKey";
pub const KEY_ACCOUNT_ADDRESS: &str = "accountAddress";
pub const KEY_CHAIN_ID: &str = "chainId";
pub const KEY_CONTRACT_NAME: &str = "contractName";
pub const KEY_CHAIN_INFO_DIR: &str = "chainInfoDir";
pub const KEY_LOG_LEVEL: &str = "logLevel";

pub const REWARD_MESSAGE_PREFIX: &str = "Random Number is: ";
