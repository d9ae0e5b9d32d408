//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParamsError;

/// The logical networks a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
    Regtest,
    /// In-process unit testing
    Unit,
}

impl Network {
    pub const ALL: [Network; 4] = [Network::Main, Network::Test, Network::Regtest, Network::Unit];

    /// Identifier used in data directories and RPC responses
    pub fn id(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
            Network::Unit => "unittest",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Network::Main => 0,
            Network::Test => 1,
            Network::Regtest => 2,
            Network::Unit => 3,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            "unittest" | "unit" => Ok(Network::Unit),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
