//! Block structure
//!
//! Headers before version 4 are identified by their Quark hash. From
//! version 4 on the header commits to the zerocoin accumulator checkpoint
//! and is identified by double SHA-256.

use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::crypto::{compute_merkle_root, quark_hash, sha256d, Hash};

/// First header version that carries an accumulator checkpoint
pub const ACCUMULATOR_HEADER_VERSION: i32 = 4;

/// Serialized size of a header without the accumulator checkpoint
pub const BASE_HEADER_LEN: usize = 80;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    pub nonce: u32,
    /// Zerocoin accumulator checkpoint, serialized from version 4 on
    pub accumulator_checkpoint: Hash,
}

impl BlockHeader {
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            time,
            bits,
            nonce,
            accumulator_checkpoint: Hash::zero(),
        }
    }

    pub fn has_accumulator_checkpoint(&self) -> bool {
        self.version >= ACCUMULATOR_HEADER_VERSION
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BASE_HEADER_LEN + 32);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_hash.0);
        bytes.extend_from_slice(&self.merkle_root.0);
        bytes.extend_from_slice(&self.time.to_le_bytes());
        bytes.extend_from_slice(&self.bits.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        if self.has_accumulator_checkpoint() {
            bytes.extend_from_slice(&self.accumulator_checkpoint.0);
        }
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        let bytes = self.to_bytes();
        if self.has_accumulator_checkpoint() {
            sha256d(&bytes)
        } else {
            quark_hash(&bytes)
        }
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the transaction ids actually in the block
    pub fn compute_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(|tx| tx.hash()).collect();
        compute_merkle_root(&tx_hashes)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }
}
