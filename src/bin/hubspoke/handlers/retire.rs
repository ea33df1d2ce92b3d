use alloy_primitives::Bytes;

use hubspoke::{BridgeRole, Result, RetireTokensParams};

use super::{bridge_pair_for, lz_tx_link, require_role};
use crate::cli::RetireArgs;

fn params_from(args: &RetireArgs) -> RetireTokensParams {
    let memo = args
        .memo
        .as_ref()
        .map(|m| Bytes::from(m.clone().into_bytes()))
        .unwrap_or_default();

    RetireTokensParams::builder()
        .oft(args.oft)
        .amount(args.amount.clone())
        .maybe_beneficiary(args.beneficiary)
        .memo(memo)
        .maybe_sender(args.sender)
        .build()
}

pub(crate) async fn handle_quote_retire(args: RetireArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Spoke)?;
    let pair = bridge_pair_for(&args.network)?;
    let (retire_param, fee) = pair.quote_retire(&params_from(&args)).await?;

    println!("Destination eid: {}", retire_param.dstEid);
    println!("Beneficiary: {}", retire_param.beneficiary);
    println!("Amount (local decimals): {}", retire_param.amountLD);
    println!("Native fee: {}", fee.nativeFee);

    Ok(())
}

pub(crate) async fn handle_retire(args: RetireArgs) -> Result<()> {
    require_role(args.network.network, BridgeRole::Spoke)?;
    let pair = bridge_pair_for(&args.network)?;
    let tx_hash = pair.retire_tokens(&params_from(&args)).await?;

    println!(
        "Retired {} OFTs at tx: {}",
        args.amount,
        lz_tx_link(tx_hash, pair.is_testnet())
    );

    Ok(())
}
