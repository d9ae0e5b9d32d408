//! MONGOcm consensus parameter core
//!
//! Per-network chain parameters, genesis self-verification, checkpoints,
//! seed bootstrap and zerocoin parameterization. Everything a node must
//! agree on with its peers before it touches the network.

pub mod chainparams;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod zerocoin;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// One coin in base units (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    pub const CENT: i64 = 1_000_000;

    /// Zerocoin fee unit
    pub const ZCENT: i64 = 1_000_000;

    pub const DECIMAL_PLACES: u8 = 8;

    /// Ticker used in addresses and logs
    pub const CHAIN_NAME: &str = "MONGOcm";

    /// Seconds in a week, the span fixed seeds are aged by
    pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;
}
