//! Spoke bridge contract bindings and wrapper
//!
//! The spoke bridge lives on a destination chain and manages representative
//! OFT tokens: `createOFT` deploys one carrying the hub-side token's
//! metadata, already wired to its hub peer; `ofts` looks one up by the hub
//! underlying it represents.

use alloy_network::Ethereum;
use alloy_primitives::{Address, FixedBytes};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_sol_types::{sol, SolEvent};
use tracing::{debug, info};

use crate::error::{BridgeError, Result};
use SpokeBridge::SpokeBridgeInstance;

/// The spoke bridge contract wrapper
pub struct SpokeBridgeContract<P: Provider<Ethereum>> {
    instance: SpokeBridgeInstance<P>,
}

impl<P: Provider<Ethereum>> SpokeBridgeContract<P> {
    /// Create a new SpokeBridgeContract
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "spoke_bridge_contract_initialized"
        );
        Self {
            instance: SpokeBridgeInstance::new(address, provider),
        }
    }

    /// Look up the representative token created for a hub underlying
    ///
    /// Returns the zero address when no token exists yet.
    pub async fn oft_for(&self, underlying: Address) -> Result<Address> {
        let oft = self.instance.ofts(underlying).call().await?;

        info!(
            underlying = %underlying,
            oft = %oft,
            contract_address = %self.instance.address(),
            event = "oft_retrieved"
        );

        Ok(oft)
    }

    /// Create the transaction request for `createOFT`
    ///
    /// `eid`/`peer` point back at the hub-side adapter so the token is born
    /// wired. The token address is recovered from the receipt with
    /// [`Self::oft_created`].
    pub fn create_oft_transaction(
        &self,
        from: Address,
        underlying: Address,
        name: String,
        symbol: String,
        eid: u32,
        peer: FixedBytes<32>,
    ) -> TransactionRequest {
        info!(
            from = %from,
            underlying = %underlying,
            name = %name,
            symbol = %symbol,
            eid = eid,
            peer = %peer,
            contract_address = %self.instance.address(),
            event = "create_oft_transaction_created"
        );

        self.instance
            .createOFT(underlying, name, symbol, eid, peer)
            .from(from)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

/// Extracts the token address from the `OFTCreated` event in a `createOFT`
/// receipt
pub fn oft_created(receipt: &TransactionReceipt) -> Result<Address> {
    let log = receipt
        .inner
        .logs()
        .iter()
        .find(|log| {
            log.topics()
                .first()
                .is_some_and(|topic| *topic == SpokeBridge::OFTCreated::SIGNATURE_HASH)
        })
        .ok_or_else(|| BridgeError::TransactionFailed {
            reason: "OFTCreated event not found".to_string(),
        })?;

    let decoded = SpokeBridge::OFTCreated::abi_decode_data(&log.data().data)?;

    Ok(decoded.1)
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract SpokeBridge {
        event OFTCreated(address underlying, address oft);

        function createOFT(
            address underlying,
            string name,
            string symbol,
            uint32 eid,
            bytes32 peer
        ) external returns (address oft);
        function ofts(address underlying) external view returns (address oft);
    }
);
