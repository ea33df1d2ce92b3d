use alloy_primitives::utils::parse_units;
use alloy_primitives::U256;
use alloy_provider::Provider;

use hubspoke::{BridgeError, Erc20Contract, Result};

use super::{load_signer, read_provider, tx_link, wallet_provider};
use crate::cli::{ApproveArgs, TokenArgs};

pub(crate) async fn handle_name(args: TokenArgs) -> Result<()> {
    println!("Network: {}", args.network);
    let token = Erc20Contract::new(args.address, read_provider(args.network)?);
    let name = token.name().await?;
    println!("Token name: {name}");

    Ok(())
}

pub(crate) async fn handle_symbol(args: TokenArgs) -> Result<()> {
    let token = Erc20Contract::new(args.address, read_provider(args.network)?);
    let symbol = token.symbol().await?;
    println!("Token symbol: {symbol}");

    Ok(())
}

pub(crate) async fn handle_decimals(args: TokenArgs) -> Result<()> {
    let token = Erc20Contract::new(args.address, read_provider(args.network)?);
    let decimals = token.decimals().await?;
    println!("Token decimals: {decimals}");

    Ok(())
}

pub(crate) async fn handle_approve(args: ApproveArgs) -> Result<()> {
    let signer = load_signer()?;
    let owner = signer.address();
    let provider = wallet_provider(args.network, signer)?;
    let token = Erc20Contract::new(args.address, provider.clone());

    let decimals = token.decimals().await?;
    let amount: U256 = parse_units(&args.amount, decimals)?.get_absolute();

    let tx = token.approve_transaction(owner, args.spender, amount);
    let receipt = provider
        .send_transaction(tx)
        .await?
        .get_receipt()
        .await
        .map_err(|e| BridgeError::Provider(e.to_string()))?;

    println!(
        "Approved {} ({amount} raw) for: {} at tx: {}",
        args.amount,
        args.spender,
        tx_link(args.network, receipt.transaction_hash)
    );

    Ok(())
}
