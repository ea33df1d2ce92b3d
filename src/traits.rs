//! Core trait abstractions for delivery tracking.
//!
//! This module defines the traits that enable dependency injection and
//! testing of the message-tracking functionality. By abstracting the Scan
//! API and time control behind traits, tests can implement fake versions
//! covering timeouts, rate limiting, and status progressions without real
//! network calls or waiting.

use alloy_primitives::TxHash;
use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::scan::ScanMessage;

/// Trait for message status retrieval from LayerZero Scan.
///
/// This is typically called repeatedly (polling) until every message from the
/// transaction reports `DELIVERED` or a terminal failure.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Rate limiting (429 responses)
/// - Message not yet indexed (404)
/// - State transitions (INFLIGHT → CONFIRMING → DELIVERED)
/// - Failed or blocked messages
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Fetches the messages produced by a source transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be parsed,
    /// the transaction is not indexed yet ([`crate::BridgeError::MessageNotFound`]),
    /// or the API rate-limits the caller.
    async fn messages_by_tx(&self, tx_hash: TxHash) -> Result<Vec<ScanMessage>>;
}

/// Trait for time-based operations.
///
/// Abstracts sleep and time queries, enabling fast-forward testing where
/// tests advance through polling loops and timeouts without actually
/// waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);

    /// Returns the current instant in time.
    fn now(&self) -> Instant;
}
