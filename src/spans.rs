//! Span helpers for bridge operations
//!
//! Orthogonal span instrumentation following production practice: static
//! span names, structured attributes, and separation from business logic.
//!
//! These helpers are used internally by [`BridgePair`](crate::BridgePair),
//! [`Deployer`](crate::Deployer) and [`MessageTracker`](crate::MessageTracker),
//! and are exposed publicly for users who need custom instrumentation.

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};
use tracing::Span;

/// Create span for creating an OFT adapter on the hub.
#[inline]
pub fn create_adapter(underlying: &Address, hub_chain: &NamedChain) -> Span {
    tracing::info_span!(
        "hubspoke.create_adapter",
        underlying = %underlying,
        hub_chain = %hub_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for creating a representative token on the spoke.
///
/// Parent: Top-level operation span (auto-attached by tracing)
/// Children: Provider RPC calls (from alloy instrumentation)
#[inline]
pub fn create_oft(underlying: &Address, hub_chain: &NamedChain, spoke_chain: &NamedChain) -> Span {
    tracing::info_span!(
        "hubspoke.create_oft",
        underlying = %underlying,
        hub_chain = %hub_chain,
        spoke_chain = %spoke_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for pointing an adapter at a remote peer.
#[inline]
pub fn set_adapter_peer(adapter: &Address, destination_eid: u32) -> Span {
    tracing::info_span!(
        "hubspoke.set_adapter_peer",
        adapter = %adapter,
        destination_eid = destination_eid,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the quote-then-send transfer flow.
#[inline]
pub fn send_tokens(adapter: &Address, destination_eid: u32) -> Span {
    tracing::info_span!(
        "hubspoke.send_tokens",
        adapter = %adapter,
        destination_eid = destination_eid,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the quote-then-send retirement flow.
#[inline]
pub fn retire_tokens(oft: &Address, destination_eid: u32) -> Span {
    tracing::info_span!(
        "hubspoke.retire_tokens",
        oft = %oft,
        destination_eid = destination_eid,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for polling LayerZero Scan until delivery.
///
/// Parent: Top-level bridge operation span
/// Children: HTTP client request spans (from reqwest instrumentation)
#[inline]
pub fn wait_for_delivery(tx_hash: TxHash, max_attempts: u32, poll_interval_secs: u64) -> Span {
    tracing::info_span!(
        "hubspoke.wait_for_delivery",
        tx_hash = %tx_hash,
        max_attempts = max_attempts,
        poll_interval_secs = poll_interval_secs,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a contract deployment.
#[inline]
pub fn deploy(chain: &NamedChain, contract: &str) -> Span {
    tracing::info_span!(
        "hubspoke.deploy",
        chain = %chain,
        contract = contract,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}
