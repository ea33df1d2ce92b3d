//! Cross-chain message delivery tracking
//!
//! A send or retire transaction is only half the story: the message still has
//! to be verified and executed on the destination chain. [`MessageTracker`]
//! polls LayerZero Scan until every message produced by the source
//! transaction is delivered, a message fails terminally, or the polling
//! budget runs out.

use alloy_primitives::TxHash;
use bon::Builder;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::bridge::PollingConfig;
use crate::error::{BridgeError, Result};
use crate::scan::ScanMessage;
use crate::spans;
use crate::traits::{Clock, StatusProvider};

/// Polls LayerZero Scan for message delivery
///
/// # Example
///
/// ```rust,no_run
/// use hubspoke::{MessageTracker, PollingConfig};
/// use hubspoke::providers::{ScanStatusProvider, TokioClock};
/// use alloy_primitives::TxHash;
///
/// # async fn example() -> Result<(), hubspoke::BridgeError> {
/// let tracker = MessageTracker::builder()
///     .status_provider(ScanStatusProvider::testnet())
///     .clock(TokioClock::new())
///     .config(PollingConfig::default())
///     .build();
///
/// let tx_hash: TxHash = [0u8; 32].into();
/// let messages = tracker.wait_for_delivery(tx_hash).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug, Clone)]
pub struct MessageTracker<S: StatusProvider, C: Clock> {
    status_provider: S,
    clock: C,
    #[builder(default)]
    config: PollingConfig,
}

impl<S: StatusProvider, C: Clock> MessageTracker<S, C> {
    /// Returns the polling configuration
    pub fn config(&self) -> PollingConfig {
        self.config
    }

    /// Fetches the current state of the messages produced by a transaction,
    /// without polling
    pub async fn status(&self, tx_hash: TxHash) -> Result<Vec<ScanMessage>> {
        self.status_provider.messages_by_tx(tx_hash).await
    }

    /// Polls until every message from the transaction is delivered
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a message reports `FAILED` or `BLOCKED`
    /// - the maximum number of attempts is reached (timeout)
    /// - the Scan API keeps failing
    pub async fn wait_for_delivery(&self, tx_hash: TxHash) -> Result<Vec<ScanMessage>> {
        let max_attempts = self.config.max_attempts;
        let poll_interval = Duration::from_secs(self.config.poll_interval_secs);

        let span = spans::wait_for_delivery(tx_hash, max_attempts, self.config.poll_interval_secs);
        let _guard = span.enter();

        info!(
            tx_hash = %tx_hash,
            max_attempts = max_attempts,
            event = "delivery_polling_started"
        );

        for attempt in 1..=max_attempts {
            let messages = match self.status_provider.messages_by_tx(tx_hash).await {
                Ok(messages) => messages,
                // Not indexed yet: the source transaction may still be
                // confirming
                Err(BridgeError::MessageNotFound) => {
                    debug!(attempt = attempt, event = "message_not_indexed");
                    self.clock.sleep(poll_interval).await;
                    continue;
                }
                Err(BridgeError::RateLimitExceeded {
                    retry_after_seconds,
                }) => {
                    debug!(
                        retry_after_seconds = retry_after_seconds,
                        event = "rate_limit_exceeded"
                    );
                    self.clock
                        .sleep(Duration::from_secs(retry_after_seconds))
                        .await;
                    continue;
                }
                Err(e) => {
                    error!(
                        error = %e,
                        attempt = attempt,
                        event = "delivery_status_request_failed"
                    );
                    return Err(e);
                }
            };

            if let Some(failed) = messages
                .iter()
                .find(|m| m.status.name.is_terminal_failure())
            {
                error!(
                    status = ?failed.status.name,
                    event = "message_delivery_failed"
                );
                return Err(BridgeError::DeliveryFailed {
                    reason: failed
                        .status
                        .message
                        .clone()
                        .unwrap_or_else(|| format!("{:?}", failed.status.name)),
                });
            }

            if !messages.is_empty() && messages.iter().all(|m| m.status.name.is_delivered()) {
                info!(
                    message_count = messages.len(),
                    attempt = attempt,
                    event = "messages_delivered"
                );
                return Ok(messages);
            }

            debug!(
                attempt = attempt,
                pending = messages
                    .iter()
                    .filter(|m| !m.status.name.is_delivered())
                    .count(),
                event = "messages_pending"
            );
            self.clock.sleep(poll_interval).await;
        }

        error!(
            total_duration_secs = self.config.total_timeout_secs(),
            event = "delivery_timeout"
        );
        Err(BridgeError::DeliveryTimeout)
    }
}
