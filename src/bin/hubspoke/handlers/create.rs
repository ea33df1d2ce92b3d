use hubspoke::{BridgeRole, Result};

use super::{address_link, bridge_pair_for, require_role, tx_link};
use crate::cli::UnderlyingArgs;

pub(crate) async fn handle_create_adapter(args: UnderlyingArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let (adapter, tx_hash) = pair.create_adapter(args.underlying).await?;

    println!(
        "Adapter created: {} for: {} at tx: {}",
        address_link(pair.hub_chain(), adapter),
        args.underlying,
        tx_link(pair.hub_chain(), tx_hash)
    );

    Ok(())
}

pub(crate) async fn handle_adapter(args: UnderlyingArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let adapter = pair.adapter_for(args.underlying).await?;

    println!("Adapter: {adapter}");

    Ok(())
}

pub(crate) async fn handle_create_oft(args: UnderlyingArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Spoke)?;
    let pair = bridge_pair_for(&args.network)?;
    let (oft, tx_hash) = pair.create_oft(args.underlying).await?;

    println!(
        "OFT created: {} for: {} at tx: {}",
        address_link(pair.spoke_chain(), oft),
        args.underlying,
        tx_link(pair.spoke_chain(), tx_hash)
    );

    Ok(())
}

pub(crate) async fn handle_oft(args: UnderlyingArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Spoke)?;
    let pair = bridge_pair_for(&args.network)?;
    let oft = pair.oft_for(args.underlying).await?;

    println!("OFT: {oft}");

    Ok(())
}

pub(crate) async fn handle_link(args: UnderlyingArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let outcome = pair.link(args.underlying).await?;

    println!(
        "Linked {}: adapter {} ({}) <-> oft {} ({}), peering tx: {}",
        args.underlying,
        address_link(pair.hub_chain(), outcome.adapter),
        pair.hub_chain(),
        address_link(pair.spoke_chain(), outcome.oft),
        pair.spoke_chain(),
        tx_link(pair.hub_chain(), outcome.peer_tx)
    );

    Ok(())
}
