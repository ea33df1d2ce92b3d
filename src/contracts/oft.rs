//! OFT contract bindings and wrapper
//!
//! Hub-side adapters and spoke-side representative tokens share the OFT
//! interface: quote a cross-chain transfer, send it, and (spoke side) retire
//! tokens back toward the hub. Quotes return the native fee the send must
//! attach as transaction value.

use alloy_network::Ethereum;
use alloy_primitives::{Address, FixedBytes};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_sol_types::{sol, SolEvent};
use tracing::{debug, info};

use crate::error::{BridgeError, Result};
use Oft::OftInstance;

/// OFT contract wrapper for transfer and retirement operations
pub struct OftContract<P: Provider<Ethereum>> {
    instance: OftInstance<P>,
}

impl<P: Provider<Ethereum>> OftContract<P> {
    /// Create a new OftContract
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "oft_contract_initialized"
        );
        Self {
            instance: OftInstance::new(address, provider),
        }
    }

    /// The underlying token this OFT moves
    ///
    /// For a hub-side adapter this is the wrapped ERC20; a spoke-side token
    /// reports the hub underlying it represents.
    pub async fn token(&self) -> Result<Address> {
        Ok(self.instance.token().call().await?)
    }

    /// The OFT's local decimals, used to scale human-entered amounts
    pub async fn decimals(&self) -> Result<u8> {
        Ok(self.instance.decimals().call().await?)
    }

    /// Quote the messaging fee for a transfer
    pub async fn quote_send(
        &self,
        param: Oft::SendParam,
        pay_in_lz_token: bool,
    ) -> Result<Oft::MessagingFee> {
        let fee = self
            .instance
            .quoteSend(param.clone(), pay_in_lz_token)
            .call()
            .await?;

        info!(
            dst_eid = param.dstEid,
            amount_ld = %param.amountLD,
            native_fee = %fee.nativeFee,
            lz_token_fee = %fee.lzTokenFee,
            contract_address = %self.instance.address(),
            event = "send_quoted"
        );

        Ok(fee)
    }

    /// Create the transaction request for `send`, attaching the quoted
    /// native fee as value
    pub fn send_transaction(
        &self,
        from: Address,
        param: Oft::SendParam,
        fee: Oft::MessagingFee,
        refund_address: Address,
    ) -> TransactionRequest {
        info!(
            from = %from,
            dst_eid = param.dstEid,
            to = %param.to,
            amount_ld = %param.amountLD,
            native_fee = %fee.nativeFee,
            contract_address = %self.instance.address(),
            event = "send_transaction_created"
        );

        let value = fee.nativeFee;
        self.instance
            .send(param, fee, refund_address)
            .from(from)
            .value(value)
            .into_transaction_request()
    }

    /// Quote the messaging fee for a retirement
    pub async fn quote_retire(
        &self,
        param: Oft::RetireParam,
        pay_in_lz_token: bool,
    ) -> Result<Oft::MessagingFee> {
        let fee = self
            .instance
            .quoteRetire(param.clone(), pay_in_lz_token)
            .call()
            .await?;

        info!(
            dst_eid = param.dstEid,
            amount_ld = %param.amountLD,
            beneficiary = %param.beneficiary,
            native_fee = %fee.nativeFee,
            contract_address = %self.instance.address(),
            event = "retire_quoted"
        );

        Ok(fee)
    }

    /// Create the transaction request for `retire`, attaching the quoted
    /// native fee as value
    pub fn retire_transaction(
        &self,
        from: Address,
        param: Oft::RetireParam,
        fee: Oft::MessagingFee,
        refund_address: Address,
    ) -> TransactionRequest {
        info!(
            from = %from,
            dst_eid = param.dstEid,
            beneficiary = %param.beneficiary,
            amount_ld = %param.amountLD,
            native_fee = %fee.nativeFee,
            contract_address = %self.instance.address(),
            event = "retire_transaction_created"
        );

        let value = fee.nativeFee;
        self.instance
            .retire(param, fee, refund_address)
            .from(from)
            .value(value)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

/// Extracts the message guid from the `OFTSent` event in a `send` or
/// `retire` receipt
///
/// The guid identifies the cross-chain message on LayerZero Scan.
pub fn sent_guid(receipt: &TransactionReceipt) -> Result<FixedBytes<32>> {
    receipt
        .inner
        .logs()
        .iter()
        .find(|log| {
            log.topics()
                .first()
                .is_some_and(|topic| *topic == Oft::OFTSent::SIGNATURE_HASH)
        })
        .and_then(|log| log.topics().get(1).copied())
        .ok_or_else(|| BridgeError::TransactionFailed {
            reason: "OFTSent event not found".to_string(),
        })
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Oft {
        struct SendParam {
            uint32 dstEid;
            bytes32 to;
            uint256 amountLD;
            uint256 minAmountLD;
            bytes extraOptions;
            bytes composeMsg;
            bytes oftCmd;
        }

        struct RetireParam {
            uint32 dstEid;
            bytes32 beneficiary;
            uint256 amountLD;
            bytes memo;
            bytes extraOptions;
        }

        struct MessagingFee {
            uint256 nativeFee;
            uint256 lzTokenFee;
        }

        event OFTSent(
            bytes32 indexed guid,
            uint32 dstEid,
            address indexed fromAddress,
            uint256 amountSentLD,
            uint256 amountReceivedLD
        );

        function token() external view returns (address);
        function decimals() external view returns (uint8);
        function quoteSend(SendParam sendParam, bool payInLzToken)
            external
            view
            returns (MessagingFee fee);
        function send(SendParam sendParam, MessagingFee fee, address refundAddress)
            external
            payable
            returns (bytes32 guid);
        function quoteRetire(RetireParam retireParam, bool payInLzToken)
            external
            view
            returns (MessagingFee fee);
        function retire(RetireParam retireParam, MessagingFee fee, address refundAddress)
            external
            payable
            returns (bytes32 guid);
    }
);
