use std::path::PathBuf;

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hubspoke",
    about = "Operations CLI for the hub/spoke OFT bridge",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    /// Deploy the bridge contract this network's role calls for
    Deploy(DeployArgs),

    /// Create an OFT adapter for an underlying token (hub)
    CreateAdapter(UnderlyingArgs),

    /// Print the adapter registered for an underlying token (hub)
    Adapter(UnderlyingArgs),

    /// Create the representative token for an underlying (spoke)
    CreateOft(UnderlyingArgs),

    /// Print the representative token for an underlying (spoke)
    Oft(UnderlyingArgs),

    /// Point an adapter at its peer on a destination network (hub)
    SetPeer(SetPeerArgs),

    /// Create adapter and token, then link them (hub + spoke)
    Link(UnderlyingArgs),

    /// Quote the messaging fee for a transfer
    QuoteSend(SendArgs),

    /// Send tokens toward the spoke
    Send(SendArgs),

    /// Quote the messaging fee for a retirement
    QuoteRetire(RetireArgs),

    /// Retire representative tokens back toward the hub
    Retire(RetireArgs),

    /// Inspect or approve an ERC20 token
    #[command(subcommand)]
    Token(TokenCommands),

    /// Generate or check the cross-chain wiring configuration
    #[command(subcommand)]
    Wiring(WiringCommands),

    /// Follow a cross-chain message until delivery
    Track(TrackArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct NetworkArgs {
    #[arg(long, env = "NETWORK", help = "network to run the task on")]
    pub(crate) network: NamedChain,

    #[arg(
        long,
        default_value = "deployments",
        help = "root of the deployment records"
    )]
    pub(crate) deployments: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DeployArgs {
    #[arg(long, help = "path to the compiled contract artifact")]
    pub(crate) artifact: PathBuf,

    #[clap(flatten)]
    pub(crate) network: NetworkArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct UnderlyingArgs {
    #[arg(help = "address of the underlying token")]
    pub(crate) underlying: Address,

    #[clap(flatten)]
    pub(crate) network: NetworkArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SetPeerArgs {
    #[arg(help = "address of the adapter")]
    pub(crate) adapter: Address,

    #[arg(help = "address of the peer")]
    pub(crate) peer: Address,

    #[arg(help = "network name of the peer")]
    pub(crate) destination: NamedChain,

    #[clap(flatten)]
    pub(crate) network: NetworkArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SendArgs {
    #[arg(help = "address of the OFT adapter")]
    pub(crate) adapter: Address,

    #[arg(help = "amount to send, formatted using token decimals")]
    pub(crate) amount: String,

    #[arg(long, help = "address of the peer on the destination")]
    pub(crate) peer: Option<Address>,

    #[arg(long, help = "network name of the peer")]
    pub(crate) destination: Option<NamedChain>,

    #[arg(long, help = "address of the sender")]
    pub(crate) sender: Option<Address>,

    #[clap(flatten)]
    pub(crate) network: NetworkArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct RetireArgs {
    #[arg(help = "address of the representative token")]
    pub(crate) oft: Address,

    #[arg(help = "amount to retire, formatted using token decimals")]
    pub(crate) amount: String,

    #[arg(long, help = "account credited with the retirement")]
    pub(crate) beneficiary: Option<Address>,

    #[arg(long, help = "free-form retirement memo")]
    pub(crate) memo: Option<String>,

    #[arg(long, help = "address of the sender")]
    pub(crate) sender: Option<Address>,

    #[clap(flatten)]
    pub(crate) network: NetworkArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum TokenCommands {
    /// Print the name of the token
    Name(TokenArgs),

    /// Print the symbol of the token
    Symbol(TokenArgs),

    /// Print the decimals of the token
    Decimals(TokenArgs),

    /// Approve a spender, amount formatted using token decimals
    Approve(ApproveArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct TokenArgs {
    #[arg(help = "address of the token")]
    pub(crate) address: Address,

    #[arg(long, env = "NETWORK", help = "network to run the task on")]
    pub(crate) network: NamedChain,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ApproveArgs {
    #[arg(help = "address of the token")]
    pub(crate) address: Address,

    #[arg(help = "address of the spender")]
    pub(crate) spender: Address,

    #[arg(help = "amount to approve, formatted using token decimals")]
    pub(crate) amount: String,

    #[arg(long, env = "NETWORK", help = "network to run the task on")]
    pub(crate) network: NamedChain,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum WiringCommands {
    /// Write the standard graph for the supported pair
    Init(WiringInitArgs),

    /// Validate a wiring graph file
    Check(WiringCheckArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct WiringInitArgs {
    #[arg(long, default_value = "wiring.json", help = "output path")]
    pub(crate) out: PathBuf,

    #[arg(long, help = "use the testnet pair")]
    pub(crate) testnet: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct WiringCheckArgs {
    #[arg(default_value = "wiring.json", help = "path of the wiring graph")]
    pub(crate) path: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct TrackArgs {
    #[arg(help = "source transaction hash")]
    pub(crate) tx_hash: TxHash,

    #[arg(long, env = "NETWORK", help = "network the transaction ran on")]
    pub(crate) network: NamedChain,

    #[arg(long, help = "maximum polling attempts")]
    pub(crate) max_attempts: Option<u32>,

    #[arg(long, help = "seconds between polling attempts")]
    pub(crate) interval: Option<u64>,
}
