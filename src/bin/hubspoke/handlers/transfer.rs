use hubspoke::{BridgeRole, Result, SendTokensParams};

use super::{bridge_pair_for, lz_tx_link, require_role};
use crate::cli::SendArgs;

fn params_from(args: &SendArgs) -> SendTokensParams {
    SendTokensParams::builder()
        .adapter(args.adapter)
        .amount(args.amount.clone())
        .maybe_destination(args.destination)
        .maybe_peer(args.peer)
        .maybe_sender(args.sender)
        .build()
}

pub(crate) async fn handle_quote_send(args: SendArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let (send_param, fee) = pair.quote_send(&params_from(&args)).await?;

    println!("Destination eid: {}", send_param.dstEid);
    println!("Peer: {}", send_param.to);
    println!("Amount (local decimals): {}", send_param.amountLD);
    println!("Native fee: {}", fee.nativeFee);

    Ok(())
}

pub(crate) async fn handle_send(args: SendArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let tx_hash = pair.send_tokens(&params_from(&args)).await?;

    println!(
        "Sent {} OFTs at tx: {}",
        args.amount,
        lz_tx_link(tx_hash, pair.is_testnet())
    );

    Ok(())
}
