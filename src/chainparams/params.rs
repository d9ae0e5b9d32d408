//! The per-network parameter record
//!
//! One `ChainParams` value holds every constant a node must agree on with
//! its peers. Records are built once by the registry and never mutated,
//! except through the unit-test wrapper.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::{DnsSeed, Network, SeedSpec};
use crate::consensus::{target_to_compact, CheckpointStore};
use crate::crypto::Hash;

/// A height at which a rule switches on.
///
/// Every rule that is not scheduled uses [`ActivationHeight::never`], a
/// height no chain will reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActivationHeight(pub u32);

impl ActivationHeight {
    pub const fn at(height: u32) -> Self {
        Self(height)
    }

    pub const fn never() -> Self {
        Self(u32::MAX)
    }

    pub fn is_never(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Active at `height` and every height after it
    pub fn is_active(&self, height: u32) -> bool {
        !self.is_never() && height >= self.0
    }

    pub fn height(&self) -> Option<u32> {
        (!self.is_never()).then_some(self.0)
    }
}

/// Base58 prefix categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    /// BIP44 coin type
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

/// Address-encoding prefixes. These are a wire contract with deployed wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    pub ext_coin_type: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfWork {
    /// Easiest allowed target
    pub pow_limit: U256,
    /// Seconds per retarget window
    pub target_timespan: u64,
    /// Seconds between blocks
    pub target_spacing: u64,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub max_reorganization_depth: u32,
    /// 0 means one per core
    pub miner_threads: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monetary {
    pub subsidy_halving_interval: u32,
    /// Supply cap in base units
    pub max_money_out: i64,
    /// Confirmations before a coinbase may be spent
    pub maturity: u32,
    pub stake_min_confirmations: u32,
    pub stake_min_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Masternodes {
    pub count_drift: u32,
    pub payments_start_time: u64,
    /// Hex-encoded uncompressed key that signs sporks
    pub spork_pubkey: String,
    pub pool_max_transactions: u32,
    pub obfuscation_dummy_address: String,
}

/// Height and time based switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activations {
    pub last_pow_block: ActivationHeight,
    pub modifier_update_block: ActivationHeight,
    pub zerocoin_start_height: ActivationHeight,
    pub zerocoin_start_time: u64,
    pub accumulator_start_height: ActivationHeight,
    pub enforce_serial_range: ActivationHeight,
    pub recalculate_accumulators: ActivationHeight,
    pub first_fraudulent_block: ActivationHeight,
    pub last_good_checkpoint: ActivationHeight,
}

/// Inputs of the genesis block and the values they must reproduce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisParams {
    /// Headline embedded in the coinbase input
    pub timestamp: String,
    /// Hex-encoded public key paid by the coinbase output
    pub output_pubkey: String,
    pub reward: i64,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub expected_hash: Hash,
    pub expected_merkle_root: Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZerocoinConfig {
    /// Trusted RSA modulus, decimal
    pub modulus: String,
    pub max_spends_per_transaction: u32,
    pub min_mint_fee: i64,
    pub mint_required_confirmations: u32,
    pub required_accumulation: u32,
    pub default_security_level: u32,
    /// Header version required once zerocoin is active
    pub header_version: i32,
    pub budget_fee_confirmations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFlags {
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Everything a node must agree on with its peers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainParams {
    pub network: Network,
    /// Magic bytes framing every p2p message
    pub message_start: [u8; 4],
    pub default_port: u16,
    /// Hex-encoded key that signs network alerts
    pub alert_pubkey: String,
    pub pow: ProofOfWork,
    pub monetary: Monetary,
    pub masternodes: Masternodes,
    pub activations: Activations,
    pub genesis: GenesisParams,
    pub base58: Base58Prefixes,
    pub zerocoin: ZerocoinConfig,
    pub flags: NetworkFlags,
    pub checkpoints: CheckpointStore,
    pub fixed_seeds: Vec<SeedSpec>,
    pub dns_seeds: Vec<DnsSeed>,
}

impl ChainParams {
    pub fn network_id(&self) -> &'static str {
        self.network.id()
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis.expected_hash
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        let prefixes = &self.base58;
        match kind {
            Base58Type::PubkeyAddress => &prefixes.pubkey_address,
            Base58Type::ScriptAddress => &prefixes.script_address,
            Base58Type::SecretKey => &prefixes.secret_key,
            Base58Type::ExtPublicKey => &prefixes.ext_public_key,
            Base58Type::ExtSecretKey => &prefixes.ext_secret_key,
            Base58Type::ExtCoinType => &prefixes.ext_coin_type,
        }
    }

    /// Blocks per retarget window
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.pow
            .target_timespan
            .checked_div(self.pow.target_spacing)
            .unwrap_or(0)
    }

    pub fn pow_limit_compact(&self) -> u32 {
        target_to_compact(&self.pow.pow_limit)
    }

    /// Blocks after the last proof-of-work block are staked
    pub fn is_pos_height(&self, height: u32) -> bool {
        match self.activations.last_pow_block.height() {
            Some(last) => height > last,
            None => false,
        }
    }
}
