use thiserror::Error;

use super::{GenesisError, Network};

/// Network selection errors
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Conflicting network switches: {0}")]
    ConflictingNetworks(String),
    #[error("Network {current} already selected, cannot switch to {requested}")]
    AlreadySelected { current: Network, requested: Network },
    #[error("Chain parameters requested before a network was selected")]
    NotSelected,
    #[error("Genesis verification failed: {0}")]
    Genesis(#[from] GenesisError),
}
