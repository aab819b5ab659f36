use alloy_primitives::Address;

use crate::{error::DeploymentError, types::deployment::DeploymentMap};

/// Returns the active (first recorded) deployment of `contract_name` on
/// `chain_id`.
pub fn resolve_address(
    deployments: &DeploymentMap,
    chain_id: &str,
    contract_name: &str,
) -> Result<Address, DeploymentError> {
    let contracts = deployments
        .contracts(chain_id)
        .ok_or_else(|| DeploymentError::UnknownChain(chain_id.to_string()))?;

    let addresses =
        contracts
            .get(contract_name)
            .ok_or_else(|| DeploymentError::UnknownContract {
                chain_id: chain_id.to_string(),
                contract: contract_name.to_string(),
            })?;

    addresses
        .first()
        .copied()
        .ok_or_else(|| DeploymentError::NoDeployments {
            chain_id: chain_id.to_string(),
            contract: contract_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    const MAP: &str = r#"{
        "4": {
            "TokenX": [
                "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
            ],
            "Retired": []
        }
    }"#;

    fn deployments() -> DeploymentMap {
        DeploymentMap::from_json(MAP.as_bytes()).unwrap()
    }

    #[test]
    fn test_first_entry_wins() {
        let resolved = resolve_address(&deployments(), "4", "TokenX").unwrap();

        assert_eq!(resolved, address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn test_unknown_chain() {
        let err = resolve_address(&deployments(), "97", "TokenX").unwrap_err();

        assert_eq!(err, DeploymentError::UnknownChain("97".to_string()));
    }

    #[test]
    fn test_unknown_contract() {
        let err = resolve_address(&deployments(), "4", "TokenY").unwrap_err();

        assert_eq!(
            err,
            DeploymentError::UnknownContract {
                chain_id: "4".to_string(),
                contract: "TokenY".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_deployment_list() {
        let err = resolve_address(&deployments(), "4", "Retired").unwrap_err();

        assert!(matches!(err, DeploymentError::NoDeployments { .. }));
    }

    #[test]
    fn test_inserted_deployments_keep_order() {
        let mut deployments = DeploymentMap::default();
        let first = address!("0000000000000000000000000000000000000001");
        let second = address!("0000000000000000000000000000000000000002");
        deployments.insert("4", "TokenX", first);
        deployments.insert("4", "TokenX", second);

        assert_eq!(resolve_address(&deployments, "4", "TokenX").unwrap(), first);
    }
}
