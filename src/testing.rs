//! Test utilities and fake implementations for delivery tracking
//!
//! This module provides fake implementations of the tracking traits so
//! integration tests can exercise the [`MessageTracker`](crate::MessageTracker)
//! under timeouts, rate limiting, indexing lag, and status progressions
//! without real network calls or waiting.

use alloy_primitives::TxHash;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::{BridgeError, Result};
use crate::scan::{MessageStatus, MessageStatusInfo, ScanMessage};
use crate::traits::{Clock, StatusProvider};

/// Builds a minimal [`ScanMessage`] with the given status
pub fn message_with_status(status: MessageStatus) -> ScanMessage {
    ScanMessage {
        pathway: None,
        status: MessageStatusInfo {
            name: status,
            message: None,
        },
    }
}

/// One scripted reply from the fake Scan API
#[derive(Clone, Debug)]
pub enum FakeReply {
    /// 404: the transaction is not indexed yet
    NotFound,
    /// 429 with a retry-after value
    RateLimited(u64),
    /// 200 with the given messages
    Messages(Vec<ScanMessage>),
}

/// A fake status provider that replays scripted reply sequences.
///
/// Each call for a transaction returns the next reply in its sequence; the
/// last reply repeats once the sequence is exhausted. Transactions without a
/// script behave as never indexed.
#[derive(Clone, Debug, Default)]
pub struct FakeStatusProvider {
    replies: Arc<Mutex<HashMap<TxHash, Vec<FakeReply>>>>,
    reply_index: Arc<Mutex<HashMap<TxHash, usize>>>,
    call_counts: Arc<Mutex<HashMap<TxHash, usize>>>,
}

impl FakeStatusProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a sequence of replies for a transaction hash.
    ///
    /// This allows testing progressions like INFLIGHT → DELIVERED.
    pub fn add_reply_sequence(&self, tx_hash: TxHash, replies: Vec<FakeReply>) {
        self.replies.lock().unwrap().insert(tx_hash, replies);
        self.reply_index.lock().unwrap().insert(tx_hash, 0);
    }

    /// Scripts a status progression, one status per poll.
    pub fn add_status_sequence(&self, tx_hash: TxHash, statuses: Vec<MessageStatus>) {
        self.add_reply_sequence(
            tx_hash,
            statuses
                .into_iter()
                .map(|s| FakeReply::Messages(vec![message_with_status(s)]))
                .collect(),
        );
    }

    /// Scripts a transaction that never progresses past INFLIGHT.
    pub fn add_always_inflight(&self, tx_hash: TxHash) {
        self.add_status_sequence(tx_hash, vec![MessageStatus::Inflight]);
    }

    /// Number of calls made for a transaction hash.
    pub fn call_count(&self, tx_hash: TxHash) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(&tx_hash)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl StatusProvider for FakeStatusProvider {
    async fn messages_by_tx(&self, tx_hash: TxHash) -> Result<Vec<ScanMessage>> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(tx_hash)
            .or_insert(0) += 1;

        let replies = self.replies.lock().unwrap();
        let Some(sequence) = replies.get(&tx_hash) else {
            return Err(BridgeError::MessageNotFound);
        };

        let mut indices = self.reply_index.lock().unwrap();
        let index = indices.entry(tx_hash).or_insert(0);
        let reply = sequence
            .get(*index)
            .or_else(|| sequence.last())
            .cloned()
            .ok_or(BridgeError::MessageNotFound)?;
        *index += 1;

        match reply {
            FakeReply::NotFound => Err(BridgeError::MessageNotFound),
            FakeReply::RateLimited(retry_after_seconds) => Err(BridgeError::RateLimitExceeded {
                retry_after_seconds,
            }),
            FakeReply::Messages(messages) => Ok(messages),
        }
    }
}

/// A fake clock that records sleeps without waiting.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the tracker slept.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }

    /// Total time the tracker would have slept.
    pub fn total_sleep_time(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
