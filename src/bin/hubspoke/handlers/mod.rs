//! One handler module per command group, plus the environment plumbing they
//! share: signer resolution, provider construction, and output helpers.

pub(crate) mod create;
pub(crate) mod deploy;
pub(crate) mod peer;
pub(crate) mod retire;
pub(crate) mod token;
pub(crate) mod track;
pub(crate) mod transfer;
pub(crate) mod wiring;

use alloy_chains::NamedChain;
use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use url::Url;

use hubspoke::{
    scan_tx_url, BridgeError, BridgePair, BridgeRole, DeploymentStore, LayerZeroChain, Result,
};

use crate::cli::NetworkArgs;

/// Resolves the transacting signer from the environment.
///
/// `PRIVATE_KEY` wins over `MNEMONIC`, matching the original tooling's
/// account setup.
pub(crate) fn load_signer() -> Result<PrivateKeySigner> {
    if let Ok(key) = std::env::var("PRIVATE_KEY") {
        return key
            .parse()
            .map_err(|e| BridgeError::InvalidConfig(format!("bad PRIVATE_KEY: {e}")));
    }
    if let Ok(phrase) = std::env::var("MNEMONIC") {
        return MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .index(0)
            .and_then(|b| b.build())
            .map_err(|e| BridgeError::InvalidConfig(format!("bad MNEMONIC: {e}")));
    }
    Err(BridgeError::MissingSigner)
}

/// A signing provider for one network, using the table's RPC resolution
pub(crate) fn wallet_provider(
    chain: NamedChain,
    signer: PrivateKeySigner,
) -> Result<impl Provider<Ethereum> + Clone> {
    let url = chain.rpc_url()?;
    Ok(ProviderBuilder::new().wallet(signer).connect_http(url))
}

/// A read-only provider for one network
pub(crate) fn read_provider(chain: NamedChain) -> Result<impl Provider<Ethereum> + Clone> {
    let url = chain.rpc_url()?;
    Ok(ProviderBuilder::new().connect_http(url))
}

/// Builds the bridge pair a task runs against, from either side.
///
/// The given network supplies its own role; its companion fills the other
/// side. Networks without a bridge role are rejected here, before any RPC
/// traffic.
pub(crate) fn bridge_pair_for(
    args: &NetworkArgs,
) -> Result<BridgePair<impl Provider<Ethereum> + Clone>> {
    let network = args.network;
    let (hub_chain, spoke_chain) = match network.bridge_role() {
        Some(BridgeRole::Hub) => (
            network,
            network
                .companion()
                .ok_or(BridgeError::MissingCompanion { chain: network })?,
        ),
        Some(BridgeRole::Spoke) => (
            network
                .companion()
                .ok_or(BridgeError::MissingCompanion { chain: network })?,
            network,
        ),
        None => {
            return Err(BridgeError::ChainNotSupported {
                chain: network.to_string(),
            })
        }
    };

    let signer = load_signer()?;
    let owner = signer.address();

    Ok(BridgePair::builder()
        .hub_chain(hub_chain)
        .spoke_chain(spoke_chain)
        .hub_provider(wallet_provider(hub_chain, signer.clone())?)
        .spoke_provider(wallet_provider(spoke_chain, signer)?)
        .store(DeploymentStore::new(&args.deployments))
        .owner(owner)
        .build())
}

/// Rejects a task invoked on a network of the wrong role, before any RPC
/// traffic
pub(crate) fn require_role(network: NamedChain, expected: BridgeRole) -> Result<()> {
    if network.bridge_role() != Some(expected) {
        return Err(BridgeError::WrongRole {
            chain: network,
            expected,
        });
    }
    Ok(())
}

/// OSC-8 terminal hyperlink
pub(crate) fn hyperlink(url: &Url, text: &str) -> String {
    format!("\u{1b}]8;;{url}\u{7}{text}\u{1b}]8;;\u{7}")
}

/// Transaction rendered as an explorer hyperlink when the chain has one
pub(crate) fn tx_link(chain: NamedChain, tx_hash: TxHash) -> String {
    match chain.explorer_tx_url(tx_hash) {
        Some(url) => hyperlink(&url, &tx_hash.to_string()),
        None => tx_hash.to_string(),
    }
}

/// Address rendered as an explorer hyperlink when the chain has one
pub(crate) fn address_link(chain: NamedChain, address: Address) -> String {
    match chain.explorer_address_url(address) {
        Some(url) => hyperlink(&url, &address.to_string()),
        None => address.to_string(),
    }
}

/// Transaction rendered as a LayerZero Scan hyperlink
pub(crate) fn lz_tx_link(tx_hash: TxHash, testnet: bool) -> String {
    hyperlink(&scan_tx_url(tx_hash, testnet), &tx_hash.to_string())
}
