use std::collections::BTreeMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Deployed contract addresses: chain id -> contract name -> addresses, the
/// first one being the active deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentMap {
    chains: BTreeMap<String, BTreeMap<String, Vec<Address>>>,
}

impl DeploymentMap {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn insert(&mut self, chain_id: &str, contract: &str, address: Address) {
        self.chains
            .entry(chain_id.to_string())
            .or_default()
            .entry(contract.to_string())
            .or_default()
            .push(address);
    }

    pub fn contracts(&self, chain_id: &str) -> Option<&BTreeMap<String, Vec<Address>>> {
        self.chains.get(chain_id)
    }
}
