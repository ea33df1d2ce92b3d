//! Adapter and token provisioning
//!
//! The hub wraps an existing token by creating a per-token OFT adapter; the
//! spoke mirrors it with a representative token carrying the hub token's
//! metadata. `link` runs the full three-step flow.

use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash};
use alloy_provider::Provider;
use tracing::info;

use super::pair::BridgePair;
use crate::chain::LayerZeroChain;
use crate::contracts::erc20::Erc20Contract;
use crate::contracts::{hub_bridge, spoke_bridge};
use crate::error::{BridgeError, Result};
use crate::protocol::Peer;
use crate::spans;

/// Outcome of a full [`BridgePair::link`] flow
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    /// Hub-side adapter created for the underlying
    pub adapter: Address,
    /// Spoke-side representative token
    pub oft: Address,
    /// Hash of the peering transaction that closed the loop
    pub peer_tx: TxHash,
}

impl<P: Provider<Ethereum> + Clone> BridgePair<P> {
    /// Creates an OFT adapter for an underlying token on the hub
    ///
    /// Returns the adapter address decoded from the `OFTAdapterCreated`
    /// event and the transaction hash.
    pub async fn create_adapter(&self, underlying: Address) -> Result<(Address, TxHash)> {
        self.ensure_hub()?;

        let span = spans::create_adapter(&underlying, &self.hub_chain());
        let _guard = span.enter();

        let bridge = self.hub_bridge()?;
        let tx = bridge.create_adapter_transaction(self.owner(), underlying);
        let receipt = self.send_and_confirm(self.hub_provider(), tx).await?;
        let adapter = hub_bridge::adapter_created(&receipt)?;

        info!(
            underlying = %underlying,
            adapter = %adapter,
            tx_hash = %receipt.transaction_hash,
            event = "adapter_created"
        );

        Ok((adapter, receipt.transaction_hash))
    }

    /// Looks up the hub-side adapter for an underlying token
    pub async fn adapter_for(&self, underlying: Address) -> Result<Address> {
        self.ensure_hub()?;
        self.hub_bridge()?.adapter_for(underlying).await
    }

    /// Creates the representative token on the spoke
    ///
    /// Reads the underlying's ERC20 metadata and its adapter from the hub
    /// chain, then creates the spoke token already wired to that adapter.
    pub async fn create_oft(&self, underlying: Address) -> Result<(Address, TxHash)> {
        self.ensure_spoke()?;

        let span = spans::create_oft(&underlying, &self.hub_chain(), &self.spoke_chain());
        let _guard = span.enter();

        // Token info comes from the origin chain
        let token = Erc20Contract::new(underlying, self.hub_provider().clone());
        let name = token.name().await?;
        let symbol = token.symbol().await?;
        let decimals = token.decimals().await?;

        info!(
            underlying = %underlying,
            name = %name,
            symbol = %symbol,
            decimals = decimals,
            event = "underlying_metadata_read"
        );

        let adapter = self.hub_bridge()?.adapter_for(underlying).await?;
        if adapter.is_zero() {
            return Err(BridgeError::InvalidPeer(format!(
                "no adapter registered for {underlying} on {}",
                self.hub_chain()
            )));
        }
        let peer = Peer::from(adapter);
        let hub_eid = self.hub_chain().endpoint_id()?;

        let bridge = self.spoke_bridge()?;
        let tx = bridge.create_oft_transaction(
            self.owner(),
            underlying,
            name,
            symbol,
            hub_eid.as_u32(),
            peer.into(),
        );
        let receipt = self.send_and_confirm(self.spoke_provider(), tx).await?;
        let oft = spoke_bridge::oft_created(&receipt)?;

        info!(
            underlying = %underlying,
            oft = %oft,
            hub_eid = hub_eid.as_u32(),
            tx_hash = %receipt.transaction_hash,
            event = "oft_created"
        );

        Ok((oft, receipt.transaction_hash))
    }

    /// Looks up the spoke-side representative token for a hub underlying
    pub async fn oft_for(&self, underlying: Address) -> Result<Address> {
        self.ensure_spoke()?;
        self.spoke_bridge()?.oft_for(underlying).await
    }

    /// Points an adapter at its peer on a destination network
    pub async fn set_adapter_peer(
        &self,
        adapter: Address,
        peer: Address,
        destination: alloy_chains::NamedChain,
    ) -> Result<TxHash> {
        self.ensure_hub()?;

        let eid = destination.endpoint_id()?;

        let span = spans::set_adapter_peer(&adapter, eid.as_u32());
        let _guard = span.enter();

        let peer = Peer::from(peer);
        if peer.is_zero() {
            return Err(BridgeError::InvalidPeer(
                "peer must not be the zero address".to_string(),
            ));
        }

        let bridge = self.hub_bridge()?;
        let tx =
            bridge.set_adapter_peer_transaction(self.owner(), adapter, eid.as_u32(), peer.into());
        let receipt = self.send_and_confirm(self.hub_provider(), tx).await?;

        info!(
            adapter = %adapter,
            peer = %peer,
            destination = %destination,
            tx_hash = %receipt.transaction_hash,
            event = "adapter_peer_set"
        );

        Ok(receipt.transaction_hash)
    }

    /// Full provisioning flow: create the adapter, create the token, link
    /// the adapter back to it
    pub async fn link(&self, underlying: Address) -> Result<LinkOutcome> {
        let (adapter, _) = self.create_adapter(underlying).await?;
        let (oft, _) = self.create_oft(underlying).await?;
        let peer_tx = self
            .set_adapter_peer(adapter, oft, self.spoke_chain())
            .await?;

        Ok(LinkOutcome {
            adapter,
            oft,
            peer_tx,
        })
    }
}
