//! Hub bridge contract bindings and wrapper
//!
//! The hub bridge lives on the origin chain and manages per-token OFT
//! adapters: `createAdapter` deploys one for an underlying ERC20, `adapters`
//! looks it up, and `setAdapterPeer` wires it to the paired contract on a
//! remote endpoint.

use alloy_network::Ethereum;
use alloy_primitives::{Address, FixedBytes};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_sol_types::{sol, SolEvent};
use tracing::{debug, info};

use crate::error::{BridgeError, Result};
use HubBridge::HubBridgeInstance;

/// The hub bridge contract wrapper
pub struct HubBridgeContract<P: Provider<Ethereum>> {
    instance: HubBridgeInstance<P>,
}

impl<P: Provider<Ethereum>> HubBridgeContract<P> {
    /// Create a new HubBridgeContract
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "hub_bridge_contract_initialized"
        );
        Self {
            instance: HubBridgeInstance::new(address, provider),
        }
    }

    /// Look up the adapter created for an underlying token
    ///
    /// Returns the zero address when no adapter exists yet.
    pub async fn adapter_for(&self, underlying: Address) -> Result<Address> {
        let adapter = self.instance.adapters(underlying).call().await?;

        info!(
            underlying = %underlying,
            adapter = %adapter,
            contract_address = %self.instance.address(),
            event = "adapter_retrieved"
        );

        Ok(adapter)
    }

    /// Create the transaction request for `createAdapter`
    ///
    /// The caller signs and sends the transaction; the adapter address is
    /// recovered from the receipt with [`Self::adapter_created`].
    pub fn create_adapter_transaction(
        &self,
        from: Address,
        underlying: Address,
    ) -> TransactionRequest {
        info!(
            from = %from,
            underlying = %underlying,
            contract_address = %self.instance.address(),
            event = "create_adapter_transaction_created"
        );

        self.instance
            .createAdapter(underlying)
            .from(from)
            .into_transaction_request()
    }

    /// Create the transaction request for `setAdapterPeer`
    pub fn set_adapter_peer_transaction(
        &self,
        from: Address,
        adapter: Address,
        eid: u32,
        peer: FixedBytes<32>,
    ) -> TransactionRequest {
        info!(
            from = %from,
            adapter = %adapter,
            eid = eid,
            peer = %peer,
            contract_address = %self.instance.address(),
            event = "set_adapter_peer_transaction_created"
        );

        self.instance
            .setAdapterPeer(adapter, eid, peer)
            .from(from)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

/// Extracts the adapter address from the `OFTAdapterCreated` event in a
/// `createAdapter` receipt
pub fn adapter_created(receipt: &TransactionReceipt) -> Result<Address> {
    let log = receipt
        .inner
        .logs()
        .iter()
        .find(|log| {
            log.topics()
                .first()
                .is_some_and(|topic| *topic == HubBridge::OFTAdapterCreated::SIGNATURE_HASH)
        })
        .ok_or_else(|| BridgeError::TransactionFailed {
            reason: "OFTAdapterCreated event not found".to_string(),
        })?;

    let decoded = HubBridge::OFTAdapterCreated::abi_decode_data(&log.data().data)?;

    Ok(decoded.1)
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract HubBridge {
        event OFTAdapterCreated(address underlying, address adapter);

        function createAdapter(address underlying) external returns (address adapter);
        function adapters(address underlying) external view returns (address adapter);
        function setAdapterPeer(address adapter, uint32 eid, bytes32 peer) external;
    }
);
