//! LayerZero protocol types and helpers
//!
//! This module contains protocol-level types used when talking to the bridge
//! contracts: endpoint identifiers, `bytes32` peer encoding, and executor
//! options encoding.

mod endpoint_id;
mod options;
mod peer;

pub use endpoint_id::{EndpointId, InvalidEndpointId};
pub use options::{default_send_options, OptionsBuilder, DEFAULT_LZ_RECEIVE_GAS};
pub use peer::Peer;
