//! Peer address encoding
//!
//! LayerZero carries remote contract addresses as `bytes32` so that non-EVM
//! networks fit the same wire format. An EVM peer is the 20-byte address
//! left-padded with zeroes; the zero word means "no peer set".

use std::fmt;

use alloy_primitives::{Address, FixedBytes, B256};

/// A `bytes32` peer slot value
///
/// # Example
///
/// ```rust
/// use hubspoke::Peer;
/// use alloy_primitives::address;
///
/// let peer = Peer::from(address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5"));
/// assert!(!peer.is_zero());
/// assert_eq!(
///     peer.to_address(),
///     address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peer(B256);

impl Peer {
    /// The unset peer (all zeroes)
    pub const ZERO: Self = Self(B256::ZERO);

    /// Wraps a raw `bytes32` value
    pub const fn new(word: B256) -> Self {
        Self(word)
    }

    /// Returns the raw `bytes32` word
    pub const fn as_word(&self) -> B256 {
        self.0
    }

    /// Whether the peer slot is unset
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Truncates the padded word back to an EVM address
    ///
    /// Takes the low 20 bytes. Meaningful only for peers on EVM networks.
    pub fn to_address(&self) -> Address {
        Address::from_slice(&self.0[12..])
    }
}

impl From<Address> for Peer {
    fn from(address: Address) -> Self {
        Self(address.into_word())
    }
}

impl From<Peer> for FixedBytes<32> {
    fn from(peer: Peer) -> Self {
        peer.0
    }
}

impl From<FixedBytes<32>> for Peer {
    fn from(word: FixedBytes<32>) -> Self {
        Self(word)
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_pad_and_truncate_roundtrip() {
        let address = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");
        let peer = Peer::from(address);
        assert_eq!(peer.to_address(), address);
    }

    #[test]
    fn test_padding_layout() {
        let address = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");
        let word = Peer::from(address).as_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(&word[12..], address.as_slice());
    }

    #[test]
    fn test_zero_peer() {
        assert!(Peer::ZERO.is_zero());
        assert!(Peer::from(Address::ZERO).is_zero());
        assert!(!Peer::from(address!("0000000000000000000000000000000000000001")).is_zero());
    }

    #[test]
    fn test_display_is_full_word() {
        let peer = Peer::from(address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"));
        let rendered = peer.to_string();
        assert!(rendered.starts_with("0x000000000000000000000000"));
        assert_eq!(rendered.len(), 2 + 64);
    }
}
