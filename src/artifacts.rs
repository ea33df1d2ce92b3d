//! Deployment artifacts
//!
//! Every deployed contract is recorded as a JSON file keyed by contract name
//! and network: `deployments/<network>/<Contract>.json`. The store is the
//! single source of truth the tasks resolve addresses from. Compiled
//! artifacts (bytecode) live separately and are only needed at deploy time.

use std::fs;
use std::path::{Path, PathBuf};

use alloy_chains::NamedChain;
use alloy_primitives::{Address, Bytes, TxHash};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BridgeError, Result};

/// Contract name of the hub bridge in artifacts and the wiring graph
pub const HUB_CONTRACT: &str = "HubBridge";

/// Contract name of the spoke bridge in artifacts and the wiring graph
pub const SPOKE_CONTRACT: &str = "SpokeBridge";

/// Record of a single deployed contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// A compiled contract ready for deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Loads a compiled artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Filesystem-backed store of deployment records
///
/// # Example
///
/// ```rust,no_run
/// use hubspoke::DeploymentStore;
/// use alloy_chains::NamedChain;
///
/// # fn example() -> Result<(), hubspoke::BridgeError> {
/// let store = DeploymentStore::new("deployments");
/// let hub = store.address(NamedChain::PolygonAmoy, "HubBridge")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    root: PathBuf,
}

impl DeploymentStore {
    /// Creates a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the record for a contract on a network
    pub fn path(&self, network: NamedChain, contract: &str) -> PathBuf {
        self.root
            .join(network.to_string())
            .join(format!("{contract}.json"))
    }

    /// Loads the deployment record for a contract on a network
    pub fn get(&self, network: NamedChain, contract: &str) -> Result<Deployment> {
        let path = self.path(network, contract);
        let raw = fs::read_to_string(&path).map_err(|_| BridgeError::MissingDeployment {
            contract: contract.to_string(),
            network: network.to_string(),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolves just the address of a deployed contract
    pub fn address(&self, network: NamedChain, contract: &str) -> Result<Address> {
        Ok(self.get(network, contract)?.address)
    }

    /// Writes (or overwrites) the deployment record for a contract
    pub fn save(&self, network: NamedChain, contract: &str, deployment: &Deployment) -> Result<()> {
        let path = self.path(network, contract);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(deployment)?)?;

        info!(
            contract = contract,
            network = %network,
            address = %deployment.address,
            path = %path.display(),
            event = "deployment_recorded"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    fn sample_deployment() -> Deployment {
        Deployment {
            address: address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"),
            transaction_hash: Some(b256!(
                "3333333333333333333333333333333333333333333333333333333333333333"
            )),
            args: vec![serde_json::json!(
                "0x6edce65403992e310a62460808c4b910d972f10f"
            )],
            block_number: Some(1),
        }
    }

    #[test]
    fn test_record_roundtrip_through_store() {
        let root = std::env::temp_dir().join(format!("hubspoke-store-{}", std::process::id()));
        let store = DeploymentStore::new(&root);
        let deployment = sample_deployment();

        store
            .save(NamedChain::PolygonAmoy, HUB_CONTRACT, &deployment)
            .unwrap();
        let loaded = store.get(NamedChain::PolygonAmoy, HUB_CONTRACT).unwrap();
        assert_eq!(loaded.address, deployment.address);
        assert_eq!(loaded.transaction_hash, deployment.transaction_hash);
        assert_eq!(loaded.args, deployment.args);

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_deployment_is_typed_error() {
        let store = DeploymentStore::new("/nonexistent/deployments");
        let err = store.get(NamedChain::Base, SPOKE_CONTRACT).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::MissingDeployment { contract, network }
                if contract == SPOKE_CONTRACT && network == "base"
        ));
    }

    #[test]
    fn test_paths_are_keyed_by_network_and_contract() {
        let store = DeploymentStore::new("deployments");
        assert_eq!(
            store.path(NamedChain::BaseSepolia, SPOKE_CONTRACT),
            PathBuf::from("deployments/base-sepolia/SpokeBridge.json")
        );
    }

    #[test]
    fn test_record_json_shape() {
        let deployment = sample_deployment();
        let json = serde_json::to_value(&deployment).unwrap();
        assert!(json.get("address").is_some());
        assert!(json.get("transactionHash").is_some());
        assert!(json.get("blockNumber").is_some());
        // optional fields are omitted when unset
        let bare = Deployment {
            transaction_hash: None,
            block_number: None,
            ..deployment
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("transactionHash").is_none());
        assert!(json.get("blockNumber").is_none());
    }

    #[test]
    fn test_artifact_parses_hardhat_style_json() {
        let raw = r#"{
            "contractName": "HubBridge",
            "bytecode": "0x6080604052"
        }"#;
        let artifact: ContractArtifact = serde_json::from_str(raw).unwrap();
        assert_eq!(artifact.contract_name, "HubBridge");
        assert_eq!(artifact.bytecode.len(), 5);
    }
}
