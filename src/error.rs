use alloy_chains::NamedChain;
use thiserror::Error;

use crate::chain::BridgeRole;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Chain not supported: {chain}")]
    ChainNotSupported { chain: String },

    #[error("Task requires a {expected} network; {chain} is not one")]
    WrongRole {
        chain: NamedChain,
        expected: BridgeRole,
    },

    #[error("No companion network configured for {chain}")]
    MissingCompanion { chain: NamedChain },

    #[error("Missing deployment artifact for {contract} on {network}")]
    MissingDeployment { contract: String, network: String },

    #[error("Missing signer: set PRIVATE_KEY or MNEMONIC")]
    MissingSigner,

    #[error("Invalid peer: {0}")]
    InvalidPeer(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract error: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Message not found on LayerZero Scan (will retry)")]
    MessageNotFound,

    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },

    #[error("Timeout waiting for message delivery")]
    DeliveryTimeout,

    #[error("Message delivery failed: {reason}")]
    DeliveryFailed { reason: String },

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),

    #[error("Amount parsing error: {0}")]
    Units(#[from] alloy_primitives::utils::UnitsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
