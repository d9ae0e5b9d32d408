//! Network registry
//!
//! Builds every profile once and remembers which genesis blocks have
//! already been verified in this process.

use once_cell::sync::{Lazy, OnceCell};
use tracing::info;

use super::{build_params, verify_genesis, ChainParams, GenesisError, GenesisInfo, Network};

static GLOBAL: Lazy<NetworkRegistry> = Lazy::new(NetworkRegistry::new);

pub struct NetworkRegistry {
    records: [ChainParams; 4],
    verified: [OnceCell<GenesisInfo>; 4],
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::from_records(Network::ALL.map(build_params))
    }

    /// Registry over caller-built records, indexed in `Network::ALL` order
    pub fn from_records(records: [ChainParams; 4]) -> Self {
        Self {
            records,
            verified: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static NetworkRegistry {
        &GLOBAL
    }

    pub fn get(&self, network: Network) -> &ChainParams {
        &self.records[network.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainParams> {
        self.records.iter()
    }

    /// Verify a network's genesis block, at most once per registry
    pub fn verify_genesis(&self, network: Network) -> Result<&GenesisInfo, GenesisError> {
        self.verified[network.index()].get_or_try_init(|| {
            let info = verify_genesis(self.get(network))?;
            info!(%network, hash = %info.hash, "genesis block verified");
            Ok(info)
        })
    }

    pub fn is_verified(&self, network: Network) -> bool {
        self.verified[network.index()].get().is_some()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
