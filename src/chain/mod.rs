//! Chain configuration and contract addresses
//!
//! This module contains the network table: LayerZero endpoint identifiers and
//! `EndpointV2` addresses, hub/spoke roles and companion links, RPC endpoint
//! resolution, and block-explorer links for all supported chains.

pub mod addresses;
mod config;

pub use config::{BridgeRole, LayerZeroChain};
