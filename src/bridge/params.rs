use alloy_chains::NamedChain;
use alloy_primitives::{Address, Bytes};
use bon::Builder;

/// Parameters for sending tokens toward the spoke
///
/// The amount is the human-entered string; it is scaled by the token's
/// on-chain decimals at quote time.
#[derive(Builder, Debug, Clone)]
pub struct SendTokensParams {
    /// Hub-side OFT adapter to send through
    adapter: Address,
    /// Human-readable amount (e.g. "1.5")
    amount: String,
    /// Destination network; the configured companion when omitted
    destination: Option<NamedChain>,
    /// Remote peer; resolved from the spoke bridge when omitted
    peer: Option<Address>,
    /// Sender and refund address; the configured owner when omitted
    sender: Option<Address>,
}

impl SendTokensParams {
    pub fn adapter(&self) -> Address {
        self.adapter
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn destination(&self) -> Option<NamedChain> {
        self.destination
    }

    pub fn peer(&self) -> Option<Address> {
        self.peer
    }

    pub fn sender(&self) -> Option<Address> {
        self.sender
    }
}

/// Parameters for retiring tokens from the spoke back toward the hub
#[derive(Builder, Debug, Clone)]
pub struct RetireTokensParams {
    /// Spoke-side representative token to retire
    oft: Address,
    /// Human-readable amount (e.g. "1.5")
    amount: String,
    /// Account credited with the retirement; the sender when omitted
    beneficiary: Option<Address>,
    /// Free-form retirement memo carried with the message
    #[builder(default)]
    memo: Bytes,
    /// Sender and refund address; the configured owner when omitted
    sender: Option<Address>,
}

impl RetireTokensParams {
    pub fn oft(&self) -> Address {
        self.oft
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn beneficiary(&self) -> Option<Address> {
        self.beneficiary
    }

    pub fn memo(&self) -> &Bytes {
        &self.memo
    }

    pub fn sender(&self) -> Option<Address> {
        self.sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_send_params_builder() {
        let params = SendTokensParams::builder()
            .adapter(Address::ZERO)
            .amount("1.5".to_string())
            .build();

        assert_eq!(params.adapter(), Address::ZERO);
        assert_eq!(params.amount(), "1.5");
        assert!(params.destination().is_none());
        assert!(params.peer().is_none());
        assert!(params.sender().is_none());
    }

    #[test]
    fn test_retire_params_builder_defaults_empty_memo() {
        let params = RetireTokensParams::builder()
            .oft(address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"))
            .amount("10".to_string())
            .build();

        assert!(params.memo().is_empty());
        assert!(params.beneficiary().is_none());
    }
}
