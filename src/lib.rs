//! # hubspoke-rs
//!
//! SDK and operations tooling for a hub-and-spoke OFT token bridge built on
//! LayerZero V2.
//!
//! The hub bridge (origin chain) wraps existing ERC20 tokens into per-token
//! OFT adapters; the spoke bridge (destination chain) mints representative
//! tokens. This library provides the deployment, provisioning, transfer,
//! retirement, and delivery-tracking flows for operating the pair, plus the
//! network table and wiring configuration behind them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubspoke::{BridgePair, BridgeError, DeploymentStore, SendTokensParams};
//! use alloy_chains::NamedChain;
//!
//! # async fn example() -> Result<(), BridgeError> {
//! # use alloy_provider::ProviderBuilder;
//! // Set up one provider per side and create the pair
//! let hub_provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let spoke_provider = ProviderBuilder::new().connect("http://localhost:8546").await?;
//!
//! let pair = BridgePair::builder()
//!     .hub_chain(NamedChain::PolygonAmoy)
//!     .spoke_chain(NamedChain::BaseSepolia)
//!     .hub_provider(hub_provider)
//!     .spoke_provider(spoke_provider)
//!     .store(DeploymentStore::new("deployments"))
//!     .owner("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse()?)
//!     .build();
//!
//! // Wrap a token on the hub, mirror it on the spoke, link the two
//! let underlying = "0x036CbD53842c5426634e7929541eC2318f3dCF7e".parse()?;
//! let outcome = pair.link(underlying).await?;
//!
//! // Move tokens across
//! let params = SendTokensParams::builder()
//!     .adapter(outcome.adapter)
//!     .amount("1.5".to_string())
//!     .build();
//! let tx_hash = pair.send_tokens(&params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivery Tracking
//!
//! ```rust,no_run
//! use hubspoke::{MessageTracker, PollingConfig};
//! use hubspoke::providers::{ScanStatusProvider, TokioClock};
//!
//! # async fn example(tx_hash: alloy_primitives::TxHash) -> Result<(), hubspoke::BridgeError> {
//! let tracker = MessageTracker::builder()
//!     .status_provider(ScanStatusProvider::testnet())
//!     .clock(TokioClock::new())
//!     .config(PollingConfig::default())
//!     .build();
//!
//! let messages = tracker.wait_for_delivery(tx_hash).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Public API
//!
//! - [`BridgePair`] - provisioning, peering, transfer and retirement flows
//! - [`Deployer`] and [`DeploymentStore`] - deployment and artifact records
//! - [`WiringGraph`] - cross-chain wiring configuration
//! - [`MessageTracker`] - LayerZero Scan delivery polling
//! - [`LayerZeroChain`] - the per-chain network table
//! - Contract wrappers for direct access: [`HubBridgeContract`],
//!   [`SpokeBridgeContract`], [`OftContract`], [`Erc20Contract`]
//! - [`BridgeError`] and [`Result`] - error types for error handling

mod artifacts;
mod bridge;
mod chain;
mod contracts;
mod deploy;
mod error;
mod protocol;
mod scan;
mod tracking;
mod wiring;

pub use artifacts::{ContractArtifact, Deployment, DeploymentStore, HUB_CONTRACT, SPOKE_CONTRACT};
pub use bridge::{BridgePair, LinkOutcome, PollingConfig, RetireTokensParams, SendTokensParams};
pub use chain::{BridgeRole, LayerZeroChain};
pub use contracts::erc20::Erc20Contract;
pub use contracts::hub_bridge::{adapter_created, HubBridgeContract};
pub use contracts::oft::{sent_guid, Oft, OftContract};
pub use contracts::spoke_bridge::{oft_created, SpokeBridgeContract};
pub use deploy::{constructor_args, ConstructorArgs, Deployer};
pub use error::{BridgeError, Result};
pub use protocol::{
    default_send_options, EndpointId, InvalidEndpointId, OptionsBuilder, Peer,
    DEFAULT_LZ_RECEIVE_GAS,
};
pub use scan::{
    scan_tx_url, MessageStatus, MessageStatusInfo, Pathway, ScanMessage, SCAN_API,
    SCAN_API_TESTNET,
};
pub use tracking::MessageTracker;
pub use wiring::{
    Connection, ConnectionConfig, ContractPoint, ExecutorConfig, ReceiveConfig, SendConfig,
    UlnConfig, WiringGraph,
};

// Public modules for advanced users: custom instrumentation, custom tracking
// providers, and test fakes
pub mod providers;
pub mod spans;
pub mod testing;
pub mod traits;
