//! The active network
//!
//! Selection happens once, at startup, before any other subsystem reads
//! parameters. After that the selected record is shared read-only.

use once_cell::sync::OnceCell;
use tracing::info;

use super::{ChainParams, Network, NetworkRegistry, ParamsError};

static ACTIVE: ActiveParams = ActiveParams::new();

/// Write-once holder of the selected network
pub struct ActiveParams {
    selected: OnceCell<Network>,
    registry: fn() -> &'static NetworkRegistry,
}

impl ActiveParams {
    pub const fn new() -> Self {
        Self::with_registry(NetworkRegistry::global)
    }

    /// Selection over another registry's records
    pub const fn with_registry(registry: fn() -> &'static NetworkRegistry) -> Self {
        Self {
            selected: OnceCell::new(),
            registry,
        }
    }

    /// Select `network`, verifying its genesis block first.
    ///
    /// Selecting the already active network again is a no-op. Switching to
    /// a different one is refused.
    pub fn select(&self, network: Network) -> Result<&'static ChainParams, ParamsError> {
        let registry = (self.registry)();
        if let Some(current) = self.selected.get() {
            return Self::same_or_refuse(*current, network, registry);
        }

        registry.verify_genesis(network)?;
        if self.selected.set(network).is_err() {
            // Lost a race against another first selection.
            let current = self.selected.get().copied().unwrap_or(network);
            return Self::same_or_refuse(current, network, registry);
        }
        info!(%network, port = registry.get(network).default_port, "network selected");
        Ok(registry.get(network))
    }

    /// The selected record
    pub fn get(&self) -> Result<&'static ChainParams, ParamsError> {
        let network = self.selected.get().ok_or(ParamsError::NotSelected)?;
        Ok((self.registry)().get(*network))
    }

    pub fn network(&self) -> Option<Network> {
        self.selected.get().copied()
    }

    fn same_or_refuse(
        current: Network,
        requested: Network,
        registry: &'static NetworkRegistry,
    ) -> Result<&'static ChainParams, ParamsError> {
        if current == requested {
            Ok(registry.get(current))
        } else {
            Err(ParamsError::AlreadySelected { current, requested })
        }
    }
}

impl Default for ActiveParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the process-wide network
pub fn select_params(network: Network) -> Result<&'static ChainParams, ParamsError> {
    ACTIVE.select(network)
}

/// The process-wide selected parameters
pub fn params() -> Result<&'static ChainParams, ParamsError> {
    ACTIVE.get()
}

/// The process-wide selected network, if any
pub fn active_network() -> Option<Network> {
    ACTIVE.network()
}
