//! Executor options encoding
//!
//! `quoteSend`/`send` take an `extraOptions` blob telling the destination
//! executor how much gas (and optional native value) to spend delivering the
//! message. This module builds the type-3 options format:
//!
//! - option type: uint16 (2 bytes, always 3)
//! - per worker option:
//!   - workerId: uint8 (1 byte, executor = 1)
//!   - option length: uint16 (2 bytes, option type byte + params)
//!   - option kind: uint8 (1 byte)
//!   - params: big-endian packed values
//!
//! Reference: <https://docs.layerzero.network/v2/developers/evm/protocol-gas-settings/options>

use alloy_primitives::{Bytes, FixedBytes};

/// Options container version understood by current endpoints
const TYPE_3: u16 = 3;

/// Worker id of the executor
const WORKER_ID_EXECUTOR: u8 = 1;

/// Executor option kinds
const OPTION_TYPE_LZRECEIVE: u8 = 1;
const OPTION_TYPE_NATIVE_DROP: u8 = 2;

/// Gas limit applied to `lzReceive` on the destination when the sender does
/// not override it. Matches the value the bridge contracts are provisioned
/// for.
pub const DEFAULT_LZ_RECEIVE_GAS: u128 = 75_000;

/// Builder for type-3 executor options
///
/// # Example
///
/// ```rust
/// use hubspoke::OptionsBuilder;
///
/// let options = OptionsBuilder::new()
///     .lz_receive(75_000, 0)
///     .build();
/// assert!(!options.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Vec<u8>,
}

impl OptionsBuilder {
    /// Starts an empty type-3 options blob
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `lzReceive` executor option with a gas limit and optional
    /// native value to deliver alongside the message
    ///
    /// The value half is omitted from the encoding when zero, matching the
    /// on-chain decoder.
    pub fn lz_receive(mut self, gas: u128, value: u128) -> Self {
        let mut params = Vec::with_capacity(32);
        params.extend_from_slice(&gas.to_be_bytes());
        if value > 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }
        self.push_executor_option(OPTION_TYPE_LZRECEIVE, &params);
        self
    }

    /// Adds a native-drop executor option transferring `amount` of the
    /// destination's native token to `receiver`
    pub fn native_drop(mut self, amount: u128, receiver: FixedBytes<32>) -> Self {
        let mut params = Vec::with_capacity(48);
        params.extend_from_slice(&amount.to_be_bytes());
        params.extend_from_slice(receiver.as_slice());
        self.push_executor_option(OPTION_TYPE_NATIVE_DROP, &params);
        self
    }

    /// Finishes the blob
    pub fn build(self) -> Bytes {
        let mut bytes = Vec::with_capacity(2 + self.options.len());
        bytes.extend_from_slice(&TYPE_3.to_be_bytes());
        bytes.extend_from_slice(&self.options);
        Bytes::from(bytes)
    }

    fn push_executor_option(&mut self, kind: u8, params: &[u8]) {
        // option length counts the kind byte plus the params
        let size = (params.len() + 1) as u16;
        self.options.push(WORKER_ID_EXECUTOR);
        self.options.extend_from_slice(&size.to_be_bytes());
        self.options.push(kind);
        self.options.extend_from_slice(params);
    }
}

/// The options blob the send path uses when the caller does not supply one:
/// a single `lzReceive` option with [`DEFAULT_LZ_RECEIVE_GAS`]
pub fn default_send_options() -> Bytes {
    OptionsBuilder::new()
        .lz_receive(DEFAULT_LZ_RECEIVE_GAS, 0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use rstest::rstest;

    #[test]
    fn test_empty_options_is_bare_header() {
        let options = OptionsBuilder::new().build();
        assert_eq!(hex::encode(&options), "0003");
    }

    #[test]
    fn test_lz_receive_known_vector() {
        // Matches Options.newOptions().addExecutorLzReceiveOption(200000, 0)
        let options = OptionsBuilder::new().lz_receive(200_000, 0).build();
        insta::assert_snapshot!(
            hex::encode_prefixed(&options),
            @"0x00030100110100000000000000000000000000030d40"
        );
    }

    #[test]
    fn test_default_send_options() {
        let options = default_send_options();
        insta::assert_snapshot!(
            hex::encode_prefixed(&options),
            @"0x000301001101000000000000000000000000000124f8"
        );
    }

    #[rstest]
    #[case(200_000, 0, 22)] // 2 header + 1 worker + 2 size + 1 kind + 16 gas
    #[case(200_000, 1, 38)] // value present adds 16 bytes
    #[case(1, u128::MAX, 38)]
    fn test_lz_receive_sizes(#[case] gas: u128, #[case] value: u128, #[case] expected: usize) {
        let options = OptionsBuilder::new().lz_receive(gas, value).build();
        assert_eq!(options.len(), expected);
    }

    #[test]
    fn test_lz_receive_with_value_layout() {
        let options = OptionsBuilder::new().lz_receive(50_000, 100).build();
        let bytes = options.to_vec();
        // size field covers kind + gas + value = 33
        assert_eq!(&bytes[3..5], &33u16.to_be_bytes());
        assert_eq!(
            u128::from_be_bytes(bytes[6..22].try_into().unwrap()),
            50_000
        );
        assert_eq!(u128::from_be_bytes(bytes[22..38].try_into().unwrap()), 100);
    }

    #[test]
    fn test_native_drop_layout() {
        let receiver = FixedBytes::<32>::from([0xAAu8; 32]);
        let options = OptionsBuilder::new().native_drop(1_000, receiver).build();
        let bytes = options.to_vec();
        assert_eq!(bytes[2], 1); // executor worker id
        assert_eq!(&bytes[3..5], &49u16.to_be_bytes()); // kind + amount + receiver
        assert_eq!(bytes[5], 2); // native drop kind
        assert_eq!(&bytes[22..54], receiver.as_slice());
    }

    #[test]
    fn test_options_are_chainable() {
        let options = OptionsBuilder::new()
            .lz_receive(75_000, 0)
            .native_drop(1, FixedBytes::<32>::ZERO)
            .build();
        // header + lzReceive (20) + nativeDrop (52)
        assert_eq!(options.len(), 2 + 20 + 52);
    }
}
