//! LayerZero V2 endpoint identifiers
//!
//! LayerZero addresses each network with an endpoint identifier (eid) that is
//! independent of the EVM chain ID. Mainnet eids live in the 30xxx range and
//! testnet eids in the 40xxx range. This module provides a strongly-typed
//! enum to prevent invalid eids at compile time.
//!
//! Reference: <https://docs.layerzero.network/v2/deployments/deployed-contracts>

use std::fmt;

use serde::{Deserialize, Serialize};

/// LayerZero V2 endpoint identifier for a network
///
/// # Example
///
/// ```rust
/// use hubspoke::EndpointId;
///
/// let hub = EndpointId::Polygon;
/// let eid: u32 = hub.into();
/// assert_eq!(eid, 30109);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
#[non_exhaustive]
pub enum EndpointId {
    /// Ethereum mainnet (eid: 30101)
    Ethereum = 30101,
    /// Polygon PoS mainnet (eid: 30109)
    Polygon = 30109,
    /// Base mainnet (eid: 30184)
    Base = 30184,
    /// Ethereum Sepolia testnet (eid: 40161)
    Sepolia = 40161,
    /// Avalanche Fuji testnet (eid: 40106)
    AvalancheFuji = 40106,
    /// Polygon Mumbai testnet (eid: 40109) - endpoint deprecated
    PolygonMumbai = 40109,
    /// Base Sepolia testnet (eid: 40245)
    BaseSepolia = 40245,
    /// Polygon Amoy testnet (eid: 40267)
    PolygonAmoy = 40267,
}

impl EndpointId {
    /// Returns the numeric eid value
    ///
    /// # Example
    ///
    /// ```rust
    /// use hubspoke::EndpointId;
    ///
    /// assert_eq!(EndpointId::Base.as_u32(), 30184);
    /// assert_eq!(EndpointId::PolygonAmoy.as_u32(), 40267);
    /// ```
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Attempts to create an EndpointId from a u32 value
    ///
    /// # Example
    ///
    /// ```rust
    /// use hubspoke::EndpointId;
    ///
    /// assert_eq!(EndpointId::from_u32(30109), Some(EndpointId::Polygon));
    /// assert_eq!(EndpointId::from_u32(40245), Some(EndpointId::BaseSepolia));
    /// assert_eq!(EndpointId::from_u32(12345), None);
    /// ```
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            30101 => Some(Self::Ethereum),
            30109 => Some(Self::Polygon),
            30184 => Some(Self::Base),
            40161 => Some(Self::Sepolia),
            40106 => Some(Self::AvalancheFuji),
            40109 => Some(Self::PolygonMumbai),
            40245 => Some(Self::BaseSepolia),
            40267 => Some(Self::PolygonAmoy),
            _ => None,
        }
    }

    /// Returns the network name as a string
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Polygon => "Polygon",
            Self::Base => "Base",
            Self::Sepolia => "Sepolia",
            Self::AvalancheFuji => "Avalanche Fuji",
            Self::PolygonMumbai => "Polygon Mumbai",
            Self::BaseSepolia => "Base Sepolia",
            Self::PolygonAmoy => "Polygon Amoy",
        }
    }

    /// Whether the eid addresses a testnet (40xxx range)
    #[inline]
    pub const fn is_testnet(self) -> bool {
        self.as_u32() >= 40000
    }
}

impl From<EndpointId> for u32 {
    #[inline]
    fn from(eid: EndpointId) -> Self {
        eid.as_u32()
    }
}

impl TryFrom<u32> for EndpointId {
    type Error = InvalidEndpointId;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(InvalidEndpointId(value))
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

/// Error returned when attempting to convert an invalid u32 to an EndpointId
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEndpointId(pub u32);

impl fmt::Display for InvalidEndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid LayerZero endpoint ID: {}", self.0)
    }
}

impl std::error::Error for InvalidEndpointId {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eid_values() {
        assert_eq!(EndpointId::Ethereum.as_u32(), 30101);
        assert_eq!(EndpointId::Polygon.as_u32(), 30109);
        assert_eq!(EndpointId::Base.as_u32(), 30184);
        assert_eq!(EndpointId::Sepolia.as_u32(), 40161);
        assert_eq!(EndpointId::AvalancheFuji.as_u32(), 40106);
        assert_eq!(EndpointId::PolygonMumbai.as_u32(), 40109);
        assert_eq!(EndpointId::BaseSepolia.as_u32(), 40245);
        assert_eq!(EndpointId::PolygonAmoy.as_u32(), 40267);
    }

    #[test]
    fn test_from_u32_valid() {
        assert_eq!(EndpointId::from_u32(30101), Some(EndpointId::Ethereum));
        assert_eq!(EndpointId::from_u32(30109), Some(EndpointId::Polygon));
        assert_eq!(EndpointId::from_u32(30184), Some(EndpointId::Base));
        assert_eq!(EndpointId::from_u32(40161), Some(EndpointId::Sepolia));
        assert_eq!(
            EndpointId::from_u32(40106),
            Some(EndpointId::AvalancheFuji)
        );
        assert_eq!(
            EndpointId::from_u32(40109),
            Some(EndpointId::PolygonMumbai)
        );
        assert_eq!(EndpointId::from_u32(40245), Some(EndpointId::BaseSepolia));
        assert_eq!(EndpointId::from_u32(40267), Some(EndpointId::PolygonAmoy));
    }

    #[test]
    fn test_from_u32_invalid() {
        assert_eq!(EndpointId::from_u32(0), None);
        assert_eq!(EndpointId::from_u32(137), None); // chain id, not an eid
        assert_eq!(EndpointId::from_u32(30100), None);
        assert_eq!(EndpointId::from_u32(50000), None);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(EndpointId::try_from(30184).unwrap(), EndpointId::Base);
        let err = EndpointId::try_from(999).unwrap_err();
        assert_eq!(err, InvalidEndpointId(999));
    }

    #[test]
    fn test_testnet_ranges() {
        assert!(!EndpointId::Ethereum.is_testnet());
        assert!(!EndpointId::Polygon.is_testnet());
        assert!(!EndpointId::Base.is_testnet());
        assert!(EndpointId::Sepolia.is_testnet());
        assert!(EndpointId::PolygonAmoy.is_testnet());
        assert!(EndpointId::BaseSepolia.is_testnet());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EndpointId::Polygon), "Polygon (30109)");
        assert_eq!(
            format!("{}", EndpointId::BaseSepolia),
            "Base Sepolia (40245)"
        );
    }

    #[test]
    fn test_conversion_roundtrip() {
        for eid in [
            EndpointId::Ethereum,
            EndpointId::Polygon,
            EndpointId::Base,
            EndpointId::Sepolia,
            EndpointId::AvalancheFuji,
            EndpointId::PolygonMumbai,
            EndpointId::BaseSepolia,
            EndpointId::PolygonAmoy,
        ] {
            let value: u32 = eid.into();
            let parsed = EndpointId::try_from(value).unwrap();
            assert_eq!(eid, parsed);
        }
    }
}
