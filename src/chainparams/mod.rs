//! Chain parameters - per-network records, genesis verification, seeds, active network

mod active;
mod address;
mod error;
mod genesis;
mod network;
mod params;
mod profiles;
mod registry;
mod seeds;

pub use active::*;
pub use address::*;
pub use error::*;
pub use genesis::*;
pub use network::*;
pub use params::*;
pub use profiles::*;
pub use registry::*;
pub use seeds::*;
#[cfg(any(test, feature = "unit-test-params"))]
pub use unit_test::*;
