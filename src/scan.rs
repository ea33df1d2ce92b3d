//! LayerZero Scan API types
//!
//! LayerZero Scan indexes every cross-chain message. Given the source
//! transaction hash it reports the messages the transaction produced and how
//! far each has progressed toward delivery on the destination chain.
//!
//! Reference: <https://scan.layerzero-api.com/v1/swagger>

use alloy_primitives::TxHash;
use serde::Deserialize;
use url::Url;

/// Scan API environment base URLs
pub const SCAN_API: &str = "https://scan.layerzero-api.com/v1";
pub const SCAN_API_TESTNET: &str = "https://scan-testnet.layerzero-api.com/v1";

/// Human-facing LayerZero Scan link for a source transaction
pub fn scan_tx_url(tx_hash: TxHash, testnet: bool) -> Url {
    let host = if testnet {
        "https://testnet.layerzeroscan.com"
    } else {
        "https://layerzeroscan.com"
    };
    // static host + hex hash always parse
    Url::parse(&format!("{host}/tx/{tx_hash}")).expect("valid scan URL")
}

/// Response from the Scan messages-by-transaction endpoint
///
/// One source transaction can emit several messages; each entry carries its
/// own pathway and status.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub data: Vec<ScanMessage>,
}

/// A single cross-chain message as indexed by Scan
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMessage {
    #[serde(default)]
    pub pathway: Option<Pathway>,
    pub status: MessageStatusInfo,
}

/// Source and destination endpoints of a message
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub src_eid: u32,
    pub dst_eid: u32,
}

/// Delivery status of a message, with an optional human-readable detail
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatusInfo {
    pub name: MessageStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// Represents how far a message has progressed
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Inflight,
    Confirming,
    Delivered,
    Failed,
    PayloadStored,
    Blocked,
}

impl MessageStatus {
    /// Whether the message reached its destination
    pub fn is_delivered(self) -> bool {
        self == Self::Delivered
    }

    /// Whether the message can no longer progress without intervention
    pub fn is_terminal_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_parse_delivered_message() {
        let body = r#"{
            "data": [
                {
                    "pathway": {
                        "srcEid": 30109,
                        "dstEid": 30184,
                        "sender": { "address": "0x0000000000000000000000000000000000000001" }
                    },
                    "status": { "name": "DELIVERED" }
                }
            ]
        }"#;

        let parsed: MessageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        let message = &parsed.data[0];
        assert_eq!(message.status.name, MessageStatus::Delivered);
        let pathway = message.pathway.as_ref().unwrap();
        assert_eq!(pathway.src_eid, 30109);
        assert_eq!(pathway.dst_eid, 30184);
    }

    #[test]
    fn test_parse_inflight_with_detail() {
        let body = r#"{
            "data": [
                {
                    "status": { "name": "INFLIGHT", "message": "waiting for confirmations" }
                }
            ]
        }"#;

        let parsed: MessageResponse = serde_json::from_str(body).unwrap();
        let status = &parsed.data[0].status;
        assert_eq!(status.name, MessageStatus::Inflight);
        assert_eq!(status.message.as_deref(), Some("waiting for confirmations"));
        assert!(parsed.data[0].pathway.is_none());
    }

    #[test]
    fn test_status_predicates() {
        assert!(MessageStatus::Delivered.is_delivered());
        assert!(!MessageStatus::Inflight.is_delivered());
        assert!(MessageStatus::Failed.is_terminal_failure());
        assert!(MessageStatus::Blocked.is_terminal_failure());
        assert!(!MessageStatus::PayloadStored.is_terminal_failure());
        assert!(!MessageStatus::Confirming.is_terminal_failure());
    }

    #[test]
    fn test_scan_tx_urls() {
        let tx = b256!("2222222222222222222222222222222222222222222222222222222222222222");
        assert_eq!(
            scan_tx_url(tx, false).as_str(),
            "https://layerzeroscan.com/tx/0x2222222222222222222222222222222222222222222222222222222222222222"
        );
        assert!(scan_tx_url(tx, true)
            .as_str()
            .starts_with("https://testnet.layerzeroscan.com/tx/"));
    }
}
