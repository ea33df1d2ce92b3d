//! Operations CLI for the hub/spoke OFT bridge.

mod cli;
mod handlers;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Commands, TokenCommands, WiringCommands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> hubspoke::Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        Commands::Deploy(args) => handlers::deploy::handle_deploy(args).await,
        Commands::CreateAdapter(args) => handlers::create::handle_create_adapter(args).await,
        Commands::Adapter(args) => handlers::create::handle_adapter(args).await,
        Commands::CreateOft(args) => handlers::create::handle_create_oft(args).await,
        Commands::Oft(args) => handlers::create::handle_oft(args).await,
        Commands::SetPeer(args) => handlers::peer::handle_set_peer(args).await,
        Commands::Link(args) => handlers::create::handle_link(args).await,
        Commands::QuoteSend(args) => handlers::transfer::handle_quote_send(args).await,
        Commands::Send(args) => handlers::transfer::handle_send(args).await,
        Commands::QuoteRetire(args) => handlers::retire::handle_quote_retire(args).await,
        Commands::Retire(args) => handlers::retire::handle_retire(args).await,
        Commands::Token(command) => match command {
            TokenCommands::Name(args) => handlers::token::handle_name(args).await,
            TokenCommands::Symbol(args) => handlers::token::handle_symbol(args).await,
            TokenCommands::Decimals(args) => handlers::token::handle_decimals(args).await,
            TokenCommands::Approve(args) => handlers::token::handle_approve(args).await,
        },
        Commands::Wiring(command) => match command {
            WiringCommands::Init(args) => handlers::wiring::handle_init(args),
            WiringCommands::Check(args) => handlers::wiring::handle_check(args),
        },
        Commands::Track(args) => handlers::track::handle_track(args).await,
    }
}
