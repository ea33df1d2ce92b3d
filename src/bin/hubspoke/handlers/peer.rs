use hubspoke::{BridgeRole, Result};

use super::{bridge_pair_for, require_role, tx_link};
use crate::cli::SetPeerArgs;

pub(crate) async fn handle_set_peer(args: SetPeerArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Hub)?;
    let pair = bridge_pair_for(&args.network)?;
    let tx_hash = pair
        .set_adapter_peer(args.adapter, args.peer, args.destination)
        .await?;

    println!(
        "Added peer: {} (on network: {}) to adapter: {} (on network: {}) at tx: {}",
        args.peer,
        args.destination,
        args.adapter,
        pair.hub_chain(),
        tx_link(pair.hub_chain(), tx_hash)
    );

    Ok(())
}
