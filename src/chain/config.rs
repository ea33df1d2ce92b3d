//! The network table: per-chain LayerZero and bridge topology data
//!
//! Everything a task needs to know about a network lives behind the
//! [`LayerZeroChain`] trait on [`NamedChain`]: its endpoint identifier, the
//! `EndpointV2` contract address, its role in the bridge pair, its companion
//! network, RPC endpoint resolution, and block-explorer links.

use std::fmt;

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};
use url::Url;

use crate::chain::addresses::{
    AVALANCHE_FUJI_ENDPOINT_ADDRESS, BASE_ENDPOINT_ADDRESS, BASE_SEPOLIA_ENDPOINT_ADDRESS,
    ETHEREUM_ENDPOINT_ADDRESS, POLYGON_AMOY_ENDPOINT_ADDRESS, POLYGON_ENDPOINT_ADDRESS,
    SEPOLIA_ENDPOINT_ADDRESS,
};
use crate::error::{BridgeError, Result};
use crate::protocol::EndpointId;

/// Which side of the bridge pair a network hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeRole {
    /// Origin side: wraps existing tokens into per-token OFT adapters
    Hub,
    /// Destination side: mints representative OFT tokens
    Spoke,
}

impl fmt::Display for BridgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hub => write!(f, "hub"),
            Self::Spoke => write!(f, "spoke"),
        }
    }
}

/// Trait for chains that participate in the bridge deployment
pub trait LayerZeroChain {
    /// The LayerZero V2 endpoint identifier of the chain
    fn endpoint_id(&self) -> Result<EndpointId>;

    /// The address of the `EndpointV2` contract on the chain
    fn endpoint_address(&self) -> Result<Address>;

    /// The chain's role in the bridge pair, if it hosts one of the contracts
    fn bridge_role(&self) -> Option<BridgeRole>;

    /// The paired network on the other side of the bridge
    fn companion(&self) -> Option<NamedChain>;

    /// The environment variable consulted for an RPC URL override
    fn rpc_env_var(&self) -> Result<&'static str>;

    /// The public RPC endpoint used when no override is set
    fn default_rpc_url(&self) -> Result<Url>;

    /// Resolves the RPC endpoint: the env override when present, otherwise
    /// the default
    fn rpc_url(&self) -> Result<Url> {
        if let Ok(raw) = std::env::var(self.rpc_env_var()?) {
            return Url::parse(&raw)
                .map_err(|e| BridgeError::InvalidConfig(format!("bad RPC URL override: {e}")));
        }
        self.default_rpc_url()
    }

    /// Block-explorer link for a transaction, when the chain has a known
    /// explorer
    fn explorer_tx_url(&self, tx_hash: TxHash) -> Option<Url>;

    /// Block-explorer link for an address
    fn explorer_address_url(&self, address: Address) -> Option<Url>;
}

fn explorer_base(chain: &NamedChain) -> Option<&'static str> {
    use NamedChain::*;

    match chain {
        Mainnet => Some("https://etherscan.io"),
        Polygon => Some("https://polygonscan.com"),
        Base => Some("https://basescan.org"),
        Sepolia => Some("https://sepolia.etherscan.io"),
        BaseSepolia => Some("https://sepolia.basescan.org"),
        PolygonAmoy => Some("https://amoy.polygonscan.com"),
        AvalancheFuji => Some("https://testnet.snowtrace.io"),
        _ => None,
    }
}

impl LayerZeroChain for NamedChain {
    fn endpoint_id(&self) -> Result<EndpointId> {
        use NamedChain::*;

        match self {
            Mainnet => Ok(EndpointId::Ethereum),
            Polygon => Ok(EndpointId::Polygon),
            Base => Ok(EndpointId::Base),
            Sepolia => Ok(EndpointId::Sepolia),
            AvalancheFuji => Ok(EndpointId::AvalancheFuji),
            PolygonMumbai => Ok(EndpointId::PolygonMumbai),
            BaseSepolia => Ok(EndpointId::BaseSepolia),
            PolygonAmoy => Ok(EndpointId::PolygonAmoy),
            _ => Err(BridgeError::ChainNotSupported {
                chain: self.to_string(),
            }),
        }
    }

    fn endpoint_address(&self) -> Result<Address> {
        use NamedChain::*;

        match self {
            Mainnet => Ok(ETHEREUM_ENDPOINT_ADDRESS),
            Polygon => Ok(POLYGON_ENDPOINT_ADDRESS),
            Base => Ok(BASE_ENDPOINT_ADDRESS),
            Sepolia => Ok(SEPOLIA_ENDPOINT_ADDRESS),
            AvalancheFuji => Ok(AVALANCHE_FUJI_ENDPOINT_ADDRESS),
            BaseSepolia => Ok(BASE_SEPOLIA_ENDPOINT_ADDRESS),
            PolygonAmoy => Ok(POLYGON_AMOY_ENDPOINT_ADDRESS),
            // Mumbai keeps an eid for wiring validation but its V2 endpoint
            // is retired
            _ => Err(BridgeError::ChainNotSupported {
                chain: self.to_string(),
            }),
        }
    }

    fn bridge_role(&self) -> Option<BridgeRole> {
        use NamedChain::*;

        match self {
            Polygon | PolygonAmoy => Some(BridgeRole::Hub),
            Base | BaseSepolia => Some(BridgeRole::Spoke),
            _ => None,
        }
    }

    fn companion(&self) -> Option<NamedChain> {
        use NamedChain::*;

        match self {
            Polygon => Some(Base),
            Base => Some(Polygon),
            PolygonAmoy => Some(BaseSepolia),
            BaseSepolia => Some(PolygonAmoy),
            _ => None,
        }
    }

    fn rpc_env_var(&self) -> Result<&'static str> {
        use NamedChain::*;

        match self {
            Mainnet => Ok("RPC_URL_ETHEREUM"),
            Polygon => Ok("RPC_URL_POLYGON"),
            Base => Ok("RPC_URL_BASE"),
            Sepolia => Ok("RPC_URL_SEPOLIA"),
            AvalancheFuji => Ok("RPC_URL_FUJI"),
            PolygonMumbai => Ok("RPC_URL_MUMBAI"),
            BaseSepolia => Ok("RPC_URL_BASESEP"),
            PolygonAmoy => Ok("RPC_URL_AMOY"),
            _ => Err(BridgeError::ChainNotSupported {
                chain: self.to_string(),
            }),
        }
    }

    fn default_rpc_url(&self) -> Result<Url> {
        use NamedChain::*;

        let raw = match self {
            Mainnet => "https://rpc.ankr.com/eth",
            Polygon => "https://polygon-rpc.com",
            Base => "https://mainnet.base.org",
            Sepolia => "https://rpc.sepolia.org/",
            AvalancheFuji => "https://rpc.ankr.com/avalanche_fuji",
            PolygonMumbai => "https://rpc.ankr.com/polygon_mumbai",
            BaseSepolia => "https://sepolia.base.org",
            PolygonAmoy => "https://rpc.ankr.com/polygon_amoy",
            _ => {
                return Err(BridgeError::ChainNotSupported {
                    chain: self.to_string(),
                })
            }
        };

        Url::parse(raw).map_err(|e| BridgeError::InvalidConfig(format!("bad default RPC URL: {e}")))
    }

    fn explorer_tx_url(&self, tx_hash: TxHash) -> Option<Url> {
        let base = explorer_base(self)?;
        Url::parse(&format!("{base}/tx/{tx_hash}")).ok()
    }

    fn explorer_address_url(&self, address: Address) -> Option<Url> {
        let base = explorer_base(self)?;
        Url::parse(&format!("{base}/address/{address}")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use rstest::rstest;

    #[rstest]
    #[case(NamedChain::Polygon, EndpointId::Polygon)]
    #[case(NamedChain::Base, EndpointId::Base)]
    #[case(NamedChain::PolygonAmoy, EndpointId::PolygonAmoy)]
    #[case(NamedChain::BaseSepolia, EndpointId::BaseSepolia)]
    #[case(NamedChain::Sepolia, EndpointId::Sepolia)]
    #[case(NamedChain::AvalancheFuji, EndpointId::AvalancheFuji)]
    fn test_endpoint_ids(#[case] chain: NamedChain, #[case] expected: EndpointId) {
        assert_eq!(chain.endpoint_id().unwrap(), expected);
    }

    #[test]
    fn test_unsupported_chain_is_error_not_panic() {
        assert!(NamedChain::Moonbeam.endpoint_id().is_err());
        assert!(NamedChain::Moonbeam.endpoint_address().is_err());
        assert!(NamedChain::Moonbeam.default_rpc_url().is_err());
    }

    #[test]
    fn test_mumbai_has_eid_but_no_endpoint() {
        assert!(NamedChain::PolygonMumbai.endpoint_id().is_ok());
        assert!(NamedChain::PolygonMumbai.endpoint_address().is_err());
    }

    #[test]
    fn test_roles() {
        assert_eq!(NamedChain::Polygon.bridge_role(), Some(BridgeRole::Hub));
        assert_eq!(NamedChain::PolygonAmoy.bridge_role(), Some(BridgeRole::Hub));
        assert_eq!(NamedChain::Base.bridge_role(), Some(BridgeRole::Spoke));
        assert_eq!(
            NamedChain::BaseSepolia.bridge_role(),
            Some(BridgeRole::Spoke)
        );
        assert_eq!(NamedChain::Sepolia.bridge_role(), None);
        assert_eq!(NamedChain::AvalancheFuji.bridge_role(), None);
    }

    #[test]
    fn test_companions_are_symmetric() {
        for chain in [
            NamedChain::Polygon,
            NamedChain::Base,
            NamedChain::PolygonAmoy,
            NamedChain::BaseSepolia,
        ] {
            let companion = chain.companion().unwrap();
            assert_eq!(companion.companion(), Some(chain));
        }
    }

    #[test]
    fn test_companions_cross_roles() {
        let hub = NamedChain::PolygonAmoy;
        let spoke = hub.companion().unwrap();
        assert_eq!(hub.bridge_role(), Some(BridgeRole::Hub));
        assert_eq!(spoke.bridge_role(), Some(BridgeRole::Spoke));
    }

    #[test]
    fn test_testnet_endpoints_share_an_address() {
        assert_eq!(
            NamedChain::PolygonAmoy.endpoint_address().unwrap(),
            NamedChain::BaseSepolia.endpoint_address().unwrap()
        );
        assert_ne!(
            NamedChain::Polygon.endpoint_address().unwrap(),
            NamedChain::PolygonAmoy.endpoint_address().unwrap()
        );
    }

    #[test]
    fn test_explorer_links() {
        let tx = b256!("1111111111111111111111111111111111111111111111111111111111111111");
        let url = NamedChain::Base.explorer_tx_url(tx).unwrap();
        assert_eq!(
            url.as_str(),
            "https://basescan.org/tx/0x1111111111111111111111111111111111111111111111111111111111111111"
        );
        assert!(NamedChain::PolygonMumbai.explorer_tx_url(tx).is_none());
    }

    #[test]
    fn test_default_rpc_urls_parse() {
        for chain in [
            NamedChain::Mainnet,
            NamedChain::Polygon,
            NamedChain::Base,
            NamedChain::Sepolia,
            NamedChain::AvalancheFuji,
            NamedChain::PolygonMumbai,
            NamedChain::BaseSepolia,
            NamedChain::PolygonAmoy,
        ] {
            assert!(chain.default_rpc_url().is_ok(), "no default for {chain}");
        }
    }
}
