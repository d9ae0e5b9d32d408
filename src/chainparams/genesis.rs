//! Genesis block construction and self-verification
//!
//! The genesis block is rebuilt from a record's inputs and must reproduce
//! the record's expected hash and merkle root, and the expected hash must
//! satisfy the genesis target. A mismatch means the embedded constants
//! disagree with each other, so the node could never sync; callers treat
//! it as fatal.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use super::{ChainParams, Network};
use crate::consensus::{meets_target, Block, BlockHeader, Script, Transaction, OP_CHECKSIG};
use crate::crypto::Hash;

/// `0x1d00ffff` pushed first in the coinbase script, as in Bitcoin
const GENESIS_SCRIPT_BITS: i64 = 486_604_799;

/// Extra-nonce byte pushed after the bits
const GENESIS_SCRIPT_EXTRA: i64 = 4;

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("{network}: genesis output key is not valid hex: {source}")]
    InvalidOutputKey {
        network: Network,
        #[source]
        source: hex::FromHexError,
    },
    #[error("{network}: genesis merkle root {computed} does not match expected {expected}")]
    MerkleRootMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network}: genesis hash {hash} is above the target for bits {bits:#010x}")]
    AboveTarget {
        network: Network,
        hash: Hash,
        bits: u32,
    },
    #[error("{network}: genesis hash {computed} does not match expected {expected}")]
    HashMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
}

/// Build the genesis block described by `params`
pub fn create_genesis_block(params: &ChainParams) -> Result<Block, GenesisError> {
    let genesis = &params.genesis;
    let pubkey = hex::decode(&genesis.output_pubkey).map_err(|source| {
        GenesisError::InvalidOutputKey {
            network: params.network,
            source,
        }
    })?;

    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_BITS)
        .push_int(GENESIS_SCRIPT_EXTRA)
        .push_data(genesis.timestamp.as_bytes());
    let script_pubkey = Script::new().push_data(&pubkey).push_opcode(OP_CHECKSIG);
    let coinbase = Transaction::coinbase(script_sig, genesis.reward, script_pubkey);

    let mut block = Block::new(
        BlockHeader::new(
            genesis.version,
            Hash::zero(),
            Hash::zero(),
            genesis.time,
            genesis.bits,
            genesis.nonce,
        ),
        vec![coinbase],
    );
    block.header.merkle_root = block.compute_merkle_root();
    Ok(block)
}

/// Summary of a verified genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisInfo {
    pub network: Network,
    pub hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Rebuild the genesis block and check it against the expected values
pub fn verify_genesis(params: &ChainParams) -> Result<GenesisInfo, GenesisError> {
    let block = create_genesis_block(params)?;
    let expected = &params.genesis;
    let network = params.network;

    let merkle_root = block.header.merkle_root;
    if merkle_root != expected.expected_merkle_root {
        error!(%network, expected = %expected.expected_merkle_root, computed = %merkle_root, "genesis merkle root mismatch");
        return Err(GenesisError::MerkleRootMismatch {
            network,
            expected: expected.expected_merkle_root,
            computed: merkle_root,
        });
    }

    if !meets_target(&expected.expected_hash, expected.bits) {
        error!(%network, hash = %expected.expected_hash, bits = expected.bits, "genesis hash above target");
        return Err(GenesisError::AboveTarget {
            network,
            hash: expected.expected_hash,
            bits: expected.bits,
        });
    }

    let hash = block.hash();
    if hash != expected.expected_hash {
        error!(%network, expected = %expected.expected_hash, computed = %hash, "genesis hash mismatch");
        return Err(GenesisError::HashMismatch {
            network,
            expected: expected.expected_hash,
            computed: hash,
        });
    }

    debug!(%network, %hash, "genesis block verified");
    Ok(GenesisInfo {
        network,
        hash,
        merkle_root,
        time: block.header.time,
        bits: block.header.bits,
        nonce: block.header.nonce,
    })
}
