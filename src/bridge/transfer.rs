//! Transfers and retirements
//!
//! Both flows are quote-then-send: build the wire parameters, ask the OFT
//! contract for the messaging fee, then submit with the native fee attached
//! as transaction value.

use alloy_network::Ethereum;
use alloy_primitives::utils::parse_units;
use alloy_primitives::{Bytes, TxHash, U256};
use alloy_provider::Provider;
use tracing::info;

use super::pair::BridgePair;
use super::params::{RetireTokensParams, SendTokensParams};
use crate::chain::LayerZeroChain;
use crate::contracts::oft::{self, Oft, OftContract};
use crate::error::{BridgeError, Result};
use crate::protocol::{default_send_options, Peer};
use crate::spans;

impl<P: Provider<Ethereum> + Clone> BridgePair<P> {
    /// Builds the send parameters and quotes the messaging fee
    ///
    /// Resolves a missing destination from the companion table and a missing
    /// peer through the spoke bridge's token registry. The human amount is
    /// scaled by the adapter's on-chain decimals.
    pub async fn quote_send(
        &self,
        params: &SendTokensParams,
    ) -> Result<(Oft::SendParam, Oft::MessagingFee)> {
        self.ensure_hub()?;

        let destination = params.destination().unwrap_or(self.spoke_chain());
        let eid = destination.endpoint_id()?;

        let span = spans::send_tokens(&params.adapter(), eid.as_u32());
        let _guard = span.enter();

        let adapter = OftContract::new(params.adapter(), self.hub_provider().clone());
        let decimals = adapter.decimals().await?;
        let amount: U256 = parse_units(params.amount(), decimals)?.get_absolute();

        let peer = match params.peer() {
            Some(peer) => Peer::from(peer),
            None => {
                // The registry is keyed by the underlying, not the adapter
                let underlying = adapter.token().await?;
                let oft = self.spoke_bridge()?.oft_for(underlying).await?;
                if oft.is_zero() {
                    return Err(BridgeError::InvalidPeer(format!(
                        "no representative token for {underlying} on {}",
                        self.spoke_chain()
                    )));
                }
                Peer::from(oft)
            }
        };

        let send_param = Oft::SendParam {
            dstEid: eid.as_u32(),
            to: peer.into(),
            amountLD: amount,
            minAmountLD: amount,
            extraOptions: default_send_options(),
            composeMsg: Bytes::new(),
            oftCmd: Bytes::new(),
        };

        let fee = adapter.quote_send(send_param.clone(), false).await?;

        info!(
            adapter = %params.adapter(),
            destination = %destination,
            amount_ld = %amount,
            native_fee = %fee.nativeFee,
            event = "send_quoted"
        );

        Ok((send_param, fee))
    }

    /// Quotes and sends tokens toward the spoke
    ///
    /// Returns the source transaction hash; delivery can be followed with
    /// [`crate::MessageTracker`].
    pub async fn send_tokens(&self, params: &SendTokensParams) -> Result<TxHash> {
        let (send_param, fee) = self.quote_send(params).await?;

        let sender = params.sender().unwrap_or(self.owner());
        let adapter = OftContract::new(params.adapter(), self.hub_provider().clone());
        let tx = adapter.send_transaction(sender, send_param, fee, sender);
        let receipt = self.send_and_confirm(self.hub_provider(), tx).await?;

        if let Ok(guid) = oft::sent_guid(&receipt) {
            info!(
                guid = %guid,
                tx_hash = %receipt.transaction_hash,
                event = "tokens_sent"
            );
        } else {
            info!(
                tx_hash = %receipt.transaction_hash,
                event = "tokens_sent"
            );
        }

        Ok(receipt.transaction_hash)
    }

    /// Builds the retirement parameters and quotes the messaging fee
    ///
    /// Retirement runs on the spoke: it burns representative tokens and
    /// carries the beneficiary and memo back toward the hub.
    pub async fn quote_retire(
        &self,
        params: &RetireTokensParams,
    ) -> Result<(Oft::RetireParam, Oft::MessagingFee)> {
        self.ensure_spoke()?;

        let hub_eid = self.hub_chain().endpoint_id()?;

        let span = spans::retire_tokens(&params.oft(), hub_eid.as_u32());
        let _guard = span.enter();

        let oft = OftContract::new(params.oft(), self.spoke_provider().clone());
        let decimals = oft.decimals().await?;
        let amount: U256 = parse_units(params.amount(), decimals)?.get_absolute();

        let beneficiary = params
            .beneficiary()
            .or(params.sender())
            .unwrap_or(self.owner());

        let retire_param = Oft::RetireParam {
            dstEid: hub_eid.as_u32(),
            beneficiary: Peer::from(beneficiary).into(),
            amountLD: amount,
            memo: params.memo().clone(),
            extraOptions: default_send_options(),
        };

        let fee = oft.quote_retire(retire_param.clone(), false).await?;

        info!(
            oft = %params.oft(),
            beneficiary = %beneficiary,
            amount_ld = %amount,
            native_fee = %fee.nativeFee,
            event = "retire_quoted"
        );

        Ok((retire_param, fee))
    }

    /// Quotes and submits a retirement
    pub async fn retire_tokens(&self, params: &RetireTokensParams) -> Result<TxHash> {
        let (retire_param, fee) = self.quote_retire(params).await?;

        let sender = params.sender().unwrap_or(self.owner());
        let oft = OftContract::new(params.oft(), self.spoke_provider().clone());
        let tx = oft.retire_transaction(sender, retire_param, fee, sender);
        let receipt = self.send_and_confirm(self.spoke_provider(), tx).await?;

        info!(
            oft = %params.oft(),
            tx_hash = %receipt.transaction_hash,
            event = "tokens_retired"
        );

        Ok(receipt.transaction_hash)
    }
}
