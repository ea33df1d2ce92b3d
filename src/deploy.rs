//! Bridge contract deployment
//!
//! Instantiates the bridge contract a network's role calls for, with the
//! network-specific constructor arguments: a hub takes the local endpoint
//! and an owner, a spoke additionally takes the hub's endpoint identifier.
//! Successful deployments are recorded in the [`DeploymentStore`].

use alloy_chains::NamedChain;
use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolValue;
use bon::Builder;
use tracing::info;

use crate::artifacts::{ContractArtifact, Deployment, DeploymentStore, HUB_CONTRACT, SPOKE_CONTRACT};
use crate::chain::{BridgeRole, LayerZeroChain};
use crate::error::{BridgeError, Result};
use crate::spans;

/// Constructor arguments resolved for one network
#[derive(Debug, Clone)]
pub struct ConstructorArgs {
    /// Which contract the network gets
    pub contract_name: &'static str,
    /// ABI-encoded arguments, appended to the creation bytecode
    pub encoded: Bytes,
    /// Human-readable argument list recorded in the deployment artifact
    pub summary: Vec<serde_json::Value>,
}

/// Resolves the contract and constructor arguments a network's role calls
/// for
///
/// # Errors
///
/// Fails when the network has no bridge role, no endpoint address, or (for
/// a spoke) no configured hub companion.
pub fn constructor_args(chain: NamedChain, owner: Address) -> Result<ConstructorArgs> {
    let endpoint = chain.endpoint_address()?;

    match chain.bridge_role() {
        Some(BridgeRole::Hub) => Ok(ConstructorArgs {
            contract_name: HUB_CONTRACT,
            encoded: (endpoint, owner).abi_encode_params().into(),
            summary: vec![
                serde_json::json!(endpoint),
                serde_json::json!(owner),
            ],
        }),
        Some(BridgeRole::Spoke) => {
            let hub = chain
                .companion()
                .ok_or(BridgeError::MissingCompanion { chain })?;
            let hub_eid = hub.endpoint_id()?;
            Ok(ConstructorArgs {
                contract_name: SPOKE_CONTRACT,
                encoded: (endpoint, owner, hub_eid.as_u32())
                    .abi_encode_params()
                    .into(),
                summary: vec![
                    serde_json::json!(endpoint),
                    serde_json::json!(owner),
                    serde_json::json!(hub_eid.as_u32()),
                ],
            })
        }
        None => Err(BridgeError::ChainNotSupported {
            chain: chain.to_string(),
        }),
    }
}

/// Deploys the bridge contract for one network and records the result
///
/// # Example
///
/// ```rust,no_run
/// use hubspoke::{ContractArtifact, Deployer, DeploymentStore};
/// use alloy_chains::NamedChain;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), hubspoke::BridgeError> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
///
/// let deployer = Deployer::builder()
///     .chain(NamedChain::PolygonAmoy)
///     .provider(provider)
///     .store(DeploymentStore::new("deployments"))
///     .build();
///
/// let artifact = ContractArtifact::load("artifacts/HubBridge.json")?;
/// let owner = "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse()?;
/// let deployment = deployer.deploy(&artifact, owner).await?;
/// println!("deployed at {}", deployment.address);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug, Clone)]
pub struct Deployer<P: Provider<Ethereum> + Clone> {
    chain: NamedChain,
    provider: P,
    store: DeploymentStore,
}

impl<P: Provider<Ethereum> + Clone> Deployer<P> {
    /// The network this deployer targets
    pub fn chain(&self) -> NamedChain {
        self.chain
    }

    /// Sends the deployment transaction and records the artifact
    ///
    /// The artifact must match the contract the network's role calls for.
    pub async fn deploy(&self, artifact: &ContractArtifact, owner: Address) -> Result<Deployment> {
        let args = constructor_args(self.chain, owner)?;

        let span = spans::deploy(&self.chain, args.contract_name);
        let _guard = span.enter();

        if artifact.contract_name != args.contract_name {
            return Err(BridgeError::InvalidConfig(format!(
                "network {} deploys {}, got artifact for {}",
                self.chain, args.contract_name, artifact.contract_name
            )));
        }

        let mut code = artifact.bytecode.to_vec();
        code.extend_from_slice(&args.encoded);
        let tx = TransactionRequest::default().with_deploy_code(code);

        let pending = self.provider.send_transaction(tx).await?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| BridgeError::Provider(e.to_string()))?;

        let address = receipt
            .contract_address
            .ok_or_else(|| BridgeError::TransactionFailed {
                reason: "deployment receipt carries no contract address".to_string(),
            })?;

        info!(
            contract = args.contract_name,
            network = %self.chain,
            address = %address,
            tx_hash = %receipt.transaction_hash,
            event = "contract_deployed"
        );

        let deployment = Deployment {
            address,
            transaction_hash: Some(receipt.transaction_hash),
            args: args.summary,
            block_number: receipt.block_number,
        };
        self.store
            .save(self.chain, args.contract_name, &deployment)?;

        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const OWNER: Address = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");

    #[test]
    fn test_hub_constructor_args() {
        let args = args_for(NamedChain::PolygonAmoy);
        assert_eq!(args.contract_name, HUB_CONTRACT);
        // two static words: endpoint + owner
        assert_eq!(args.encoded.len(), 64);
        assert_eq!(args.summary.len(), 2);
    }

    #[test]
    fn test_spoke_constructor_args_carry_hub_eid() {
        let args = args_for(NamedChain::BaseSepolia);
        assert_eq!(args.contract_name, SPOKE_CONTRACT);
        // three static words: endpoint + owner + hub eid
        assert_eq!(args.encoded.len(), 96);
        // uint32 is right-aligned in the last word
        let eid = u32::from_be_bytes(args.encoded[92..96].try_into().unwrap());
        assert_eq!(eid, 40267); // Polygon Amoy
    }

    #[test]
    fn test_owner_is_second_word() {
        let args = args_for(NamedChain::Polygon);
        assert_eq!(&args.encoded[44..64], OWNER.as_slice());
    }

    #[test]
    fn test_roleless_network_is_rejected() {
        let err = constructor_args(NamedChain::Sepolia, OWNER).unwrap_err();
        assert!(matches!(err, BridgeError::ChainNotSupported { .. }));
    }

    fn args_for(chain: NamedChain) -> ConstructorArgs {
        constructor_args(chain, OWNER).unwrap()
    }
}
