//! Cryptography module - double SHA-256, Quark header hashing, Merkle trees

mod hash;
mod merkle;
pub mod quark;

pub use hash::*;
pub use merkle::*;
pub use quark::quark_hash;
