//! Zerocoin parameterization and activation gating

mod activation;
mod groups;
mod params;

pub use groups::{is_probable_prime, IntegerGroup};
pub use params::*;
