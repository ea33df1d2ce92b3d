//! The bridge pair orchestrator
//!
//! [`BridgePair`] holds one provider per side of the bridge plus the
//! deployment store, and implements the operational task bodies: adapter and
//! token provisioning in `provision`, transfers and retirements in
//! `transfer`.

use alloy_chains::NamedChain;
use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use bon::Builder;

use crate::artifacts::{DeploymentStore, HUB_CONTRACT, SPOKE_CONTRACT};
use crate::chain::{BridgeRole, LayerZeroChain};
use crate::contracts::hub_bridge::HubBridgeContract;
use crate::contracts::spoke_bridge::SpokeBridgeContract;
use crate::error::{BridgeError, Result};

/// Orchestrates the deployed bridge pair
///
/// # Example
///
/// ```rust,no_run
/// use hubspoke::{BridgePair, DeploymentStore};
/// use alloy_chains::NamedChain;
///
/// # async fn example() -> Result<(), hubspoke::BridgeError> {
/// # use alloy_provider::ProviderBuilder;
/// let hub_provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let spoke_provider = ProviderBuilder::new().connect("http://localhost:8546").await?;
///
/// let pair = BridgePair::builder()
///     .hub_chain(NamedChain::PolygonAmoy)
///     .spoke_chain(NamedChain::BaseSepolia)
///     .hub_provider(hub_provider)
///     .spoke_provider(spoke_provider)
///     .store(DeploymentStore::new("deployments"))
///     .owner("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse()?)
///     .build();
///
/// let adapter = pair.adapter_for("0x036CbD53842c5426634e7929541eC2318f3dCF7e".parse()?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct BridgePair<P: Provider<Ethereum> + Clone> {
    hub_chain: NamedChain,
    spoke_chain: NamedChain,
    hub_provider: P,
    spoke_provider: P,
    store: DeploymentStore,
    owner: Address,
}

impl<P: Provider<Ethereum> + Clone> BridgePair<P> {
    /// Returns the hub chain
    pub fn hub_chain(&self) -> NamedChain {
        self.hub_chain
    }

    /// Returns the spoke chain
    pub fn spoke_chain(&self) -> NamedChain {
        self.spoke_chain
    }

    /// Returns the hub provider
    pub fn hub_provider(&self) -> &P {
        &self.hub_provider
    }

    /// Returns the spoke provider
    pub fn spoke_provider(&self) -> &P {
        &self.spoke_provider
    }

    /// Returns the transacting owner address
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the deployment store
    pub fn store(&self) -> &DeploymentStore {
        &self.store
    }

    /// Whether the pair runs in the testnet environment
    pub fn is_testnet(&self) -> bool {
        self.hub_chain.is_testnet()
    }

    /// The hub bridge contract, resolved from the deployment store
    pub fn hub_bridge(&self) -> Result<HubBridgeContract<P>> {
        let address = self.store.address(self.hub_chain, HUB_CONTRACT)?;
        Ok(HubBridgeContract::new(address, self.hub_provider.clone()))
    }

    /// The spoke bridge contract, resolved from the deployment store
    pub fn spoke_bridge(&self) -> Result<SpokeBridgeContract<P>> {
        let address = self.store.address(self.spoke_chain, SPOKE_CONTRACT)?;
        Ok(SpokeBridgeContract::new(
            address,
            self.spoke_provider.clone(),
        ))
    }

    pub(crate) fn ensure_hub(&self) -> Result<()> {
        if self.hub_chain.bridge_role() != Some(BridgeRole::Hub) {
            return Err(BridgeError::WrongRole {
                chain: self.hub_chain,
                expected: BridgeRole::Hub,
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_spoke(&self) -> Result<()> {
        if self.spoke_chain.bridge_role() != Some(BridgeRole::Spoke) {
            return Err(BridgeError::WrongRole {
                chain: self.spoke_chain,
                expected: BridgeRole::Spoke,
            });
        }
        Ok(())
    }

    pub(crate) async fn send_and_confirm(
        &self,
        provider: &P,
        tx: TransactionRequest,
    ) -> Result<TransactionReceipt> {
        let pending = provider.send_transaction(tx).await?;
        pending
            .get_receipt()
            .await
            .map_err(|e| BridgeError::Provider(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_pairings() {
        // the checks guarding every task body
        assert_eq!(
            NamedChain::PolygonAmoy.bridge_role(),
            Some(BridgeRole::Hub)
        );
        assert_eq!(
            NamedChain::BaseSepolia.bridge_role(),
            Some(BridgeRole::Spoke)
        );
        assert_eq!(
            NamedChain::PolygonAmoy.companion(),
            Some(NamedChain::BaseSepolia)
        );
    }
}
