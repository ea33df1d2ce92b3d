use hubspoke::providers::{ScanStatusProvider, TokioClock};
use hubspoke::{MessageTracker, PollingConfig, Result};

use super::lz_tx_link;
use crate::cli::TrackArgs;

pub(crate) async fn handle_track(args: TrackArgs) -> Result<()> {
    let testnet = args.network.is_testnet();
    let status_provider = if testnet {
        ScanStatusProvider::testnet()
    } else {
        ScanStatusProvider::mainnet()
    };

    let mut config = PollingConfig::default();
    if let Some(max_attempts) = args.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    if let Some(interval) = args.interval {
        config = config.with_poll_interval_secs(interval);
    }

    let tracker = MessageTracker::builder()
        .status_provider(status_provider)
        .clock(TokioClock::new())
        .config(config)
        .build();

    println!("Tracking {}", lz_tx_link(args.tx_hash, testnet));

    let messages = tracker.wait_for_delivery(args.tx_hash).await?;
    for message in &messages {
        match &message.pathway {
            Some(pathway) => println!(
                "Delivered: {} -> {}",
                pathway.src_eid, pathway.dst_eid
            ),
            None => println!("Delivered"),
        }
    }

    Ok(())
}
