//! Consensus primitives - blocks, coinbase transactions, compact targets, checkpoints

mod block;
mod checkpoints;
mod difficulty;
mod script;
mod transaction;

pub use block::*;
pub use checkpoints::*;
pub use difficulty::*;
pub use script::*;
pub use transaction::*;
