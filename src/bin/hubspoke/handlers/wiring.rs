use hubspoke::{Result, WiringGraph};

use crate::cli::{WiringCheckArgs, WiringInitArgs};

pub(crate) fn handle_init(args: WiringInitArgs) -> Result<()> {
    let graph = WiringGraph::default_pair(args.testnet);
    graph.save(&args.out)?;

    println!(
        "Wrote {} ({} contracts, {} connections)",
        args.out.display(),
        graph.contracts.len(),
        graph.connections.len()
    );

    Ok(())
}

pub(crate) fn handle_check(args: WiringCheckArgs) -> Result<()> {
    let graph = WiringGraph::load(&args.path)?;

    for connection in &graph.connections {
        println!(
            "{} ({}) -> {} ({}){}",
            connection.from.contract_name,
            connection.from.eid,
            connection.to.contract_name,
            connection.to.eid,
            if connection.config.is_some() {
                " [custom config]"
            } else {
                ""
            }
        );
    }
    println!("{} is valid", args.path.display());

    Ok(())
}
