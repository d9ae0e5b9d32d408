//! MONGOcm node bootstrap
//!
//! Selects a network, proves the compiled-in genesis block reproduces
//! itself, builds the zerocoin parameters and reports the result. Any
//! failure stops the process before it could join the network.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mongocm_core::chainparams::{fixed_seed_addresses, select_params, NetworkRegistry};
use mongocm_core::config::NodeConfig;
use mongocm_core::zerocoin::zerocoin_params;

fn main() -> ExitCode {
    let config = NodeConfig::parse();
    init_logging(config.log.as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "startup aborted");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = filter
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn run(config: &NodeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let network = config.resolve_network()?;
    let params = select_params(network)?;
    let genesis = NetworkRegistry::global().verify_genesis(network)?;
    info!(
        %network,
        hash = %genesis.hash,
        merkle_root = %genesis.merkle_root,
        time = genesis.time,
        bits = %format!("{:#010x}", genesis.bits),
        "genesis"
    );

    let zerocoin = zerocoin_params(params)?;
    info!(
        modulus_bits = zerocoin.modulus_bits(),
        security_level = zerocoin.security_level,
        "zerocoin ready"
    );

    let seeds = fixed_seed_addresses(&params.fixed_seeds);
    info!(
        fixed = seeds.len(),
        dns = params.dns_seeds.len(),
        checkpoints = params.checkpoints.len(),
        last_checkpoint = params.checkpoints.total_blocks_estimate(),
        "bootstrap data loaded"
    );

    if config.print_params {
        println!("{}", serde_json::to_string_pretty(params)?);
    }
    Ok(())
}
