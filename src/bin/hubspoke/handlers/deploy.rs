use hubspoke::{ContractArtifact, Deployer, DeploymentStore, Result};

use super::{address_link, load_signer, tx_link, wallet_provider};
use crate::cli::DeployArgs;

pub(crate) async fn handle_deploy(args: DeployArgs) -> Result<()> {
    let network = args.network.network;
    let signer = load_signer()?;
    let owner = signer.address();

    println!("Network: {network}");
    println!("Deployer: {owner}");

    let provider = wallet_provider(network, signer)?;
    let deployer = Deployer::builder()
        .chain(network)
        .provider(provider)
        .store(DeploymentStore::new(&args.network.deployments))
        .build();

    let artifact = ContractArtifact::load(&args.artifact)?;
    let deployment = deployer.deploy(&artifact, owner).await?;

    println!(
        "Deployed contract: {}, network: {network}, address: {}",
        artifact.contract_name,
        address_link(network, deployment.address)
    );
    if let Some(tx_hash) = deployment.transaction_hash {
        println!("Deployment tx: {}", tx_link(network, tx_hash));
    }

    Ok(())
}
