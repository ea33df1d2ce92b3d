// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! LayerZero `EndpointV2` contract addresses across the supported chains
//!
//! LayerZero deploys the V2 endpoint at a shared address per environment:
//! one address serves the mainnets and another serves the testnets. The
//! constants stay per-chain so a future divergence is a one-line change.

use alloy_primitives::{address, Address};

/// <https://etherscan.io/address/0x1a44076050125825900e736c501f859c50fE728c>
pub const ETHEREUM_ENDPOINT_ADDRESS: Address =
    address!("1a44076050125825900e736c501f859c50fE728c");

/// <https://polygonscan.com/address/0x1a44076050125825900e736c501f859c50fE728c>
pub const POLYGON_ENDPOINT_ADDRESS: Address =
    address!("1a44076050125825900e736c501f859c50fE728c");

/// <https://basescan.org/address/0x1a44076050125825900e736c501f859c50fE728c>
pub const BASE_ENDPOINT_ADDRESS: Address = address!("1a44076050125825900e736c501f859c50fE728c");

/// <https://sepolia.etherscan.io/address/0x6EDCE65403992e310A62460808c4b910D972f10f>
pub const SEPOLIA_ENDPOINT_ADDRESS: Address =
    address!("6EDCE65403992e310A62460808c4b910D972f10f");

/// <https://amoy.polygonscan.com/address/0x6EDCE65403992e310A62460808c4b910D972f10f>
pub const POLYGON_AMOY_ENDPOINT_ADDRESS: Address =
    address!("6EDCE65403992e310A62460808c4b910D972f10f");

/// <https://sepolia.basescan.org/address/0x6EDCE65403992e310A62460808c4b910D972f10f>
pub const BASE_SEPOLIA_ENDPOINT_ADDRESS: Address =
    address!("6EDCE65403992e310A62460808c4b910D972f10f");

/// <https://testnet.snowtrace.io/address/0x6EDCE65403992e310A62460808c4b910D972f10f>
pub const AVALANCHE_FUJI_ENDPOINT_ADDRESS: Address =
    address!("6EDCE65403992e310A62460808c4b910D972f10f");
