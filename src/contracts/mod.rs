//! Bridge contract bindings
//!
//! This module contains Alloy-generated contract bindings for the deployed
//! bridge contracts and the tokens they move.
//!
//! ## Public API
//!
//! Contract wrappers provide type-safe, instrumented interfaces:
//!
//! - [`HubBridgeContract`](hub_bridge::HubBridgeContract) - adapter provisioning and peering on the hub
//! - [`SpokeBridgeContract`](spoke_bridge::SpokeBridgeContract) - representative token provisioning on a spoke
//! - [`OftContract`](oft::OftContract) - quote/send/retire on either side
//! - [`Erc20Contract`](erc20::Erc20Contract) - token metadata and approvals

pub mod erc20;
pub mod hub_bridge;
pub mod oft;
pub mod spoke_bridge;
