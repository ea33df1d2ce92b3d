//! LayerZero Scan status provider implementation.

use alloy_primitives::TxHash;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, trace};

use crate::error::{BridgeError, Result};
use crate::scan::{MessageResponse, ScanMessage, SCAN_API, SCAN_API_TESTNET};
use crate::traits::StatusProvider;

/// Production status provider using the LayerZero Scan API.
///
/// # Examples
///
/// ```rust,no_run
/// use hubspoke::providers::ScanStatusProvider;
/// use hubspoke::traits::StatusProvider;
/// use alloy_primitives::TxHash;
///
/// # async fn example() -> Result<(), hubspoke::BridgeError> {
/// let provider = ScanStatusProvider::mainnet();
/// let tx_hash: TxHash = [0u8; 32].into();
/// let messages = provider.messages_by_tx(tx_hash).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScanStatusProvider {
    base_url: String,
    client: Client,
}

impl ScanStatusProvider {
    /// Creates a new Scan status provider.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the Scan API (e.g. <https://scan.layerzero-api.com/v1>)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Creates a provider for the mainnet environment.
    pub fn mainnet() -> Self {
        Self::new(SCAN_API)
    }

    /// Creates a provider for the testnet environment.
    pub fn testnet() -> Self {
        Self::new(SCAN_API_TESTNET)
    }

    /// Constructs the full API URL for a source transaction hash.
    fn messages_url(&self, tx_hash: TxHash) -> String {
        format!("{}/messages/tx/{}", self.base_url, tx_hash)
    }
}

#[async_trait]
impl StatusProvider for ScanStatusProvider {
    #[instrument(skip(self), fields(tx_hash = %tx_hash))]
    async fn messages_by_tx(&self, tx_hash: TxHash) -> Result<Vec<ScanMessage>> {
        let url = self.messages_url(tx_hash);
        trace!(url = %url, "Requesting message status from LayerZero Scan");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BridgeError::Network)?;

        let status_code = response.status();
        trace!(status_code = %status_code, "Received response from LayerZero Scan");

        // Rate limiting - extract Retry-After header if present
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            debug!(retry_after_seconds = retry_after, "Rate limit exceeded");
            return Err(BridgeError::RateLimitExceeded {
                retry_after_seconds: retry_after,
            });
        }

        // 404 - the transaction is not indexed yet (should be retried)
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("Message not indexed yet");
            return Err(BridgeError::MessageNotFound);
        }

        response.error_for_status_ref()?;

        let parsed: MessageResponse = response
            .json()
            .await
            .map_err(BridgeError::Network)?;

        debug!(
            message_count = parsed.data.len(),
            "Message status response parsed"
        );

        Ok(parsed.data)
    }
}
