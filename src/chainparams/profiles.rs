//! Network profiles
//!
//! Main sets every field. The other networks start from a base record and
//! spell out each field they change with struct update syntax, so every
//! delta from the base is visible in one place.

use super::{
    Activations, ActivationHeight, Base58Prefixes, ChainParams, DnsSeed, GenesisParams,
    Masternodes, Monetary, Network, NetworkFlags, ProofOfWork, SeedSpec, ZerocoinConfig,
};
use crate::consensus::{pow_limit, CheckpointStore, CheckpointSummary};
use crate::constants::{COIN, ZCENT};
use crate::crypto::Hash;

/// Published genesis block shared by main, test and regtest, and checkpoint 0
/// of every table.
///
/// Neither Quark nor sha256d over the genesis header reproduces it, so
/// genesis verification reports a hash mismatch for every network.
pub const GENESIS_HASH: Hash =
    Hash::from_static_hex("00000f94fa4edbf8694d43ccff17ec45bc8c97770d2e447e24b47b9ce1b3e4f8");
pub const GENESIS_MERKLE_ROOT: Hash =
    Hash::from_static_hex("17d8b7f74a38dd9f148d0969454de41c11400882308bc3289a735830ace3a59f");

const GENESIS_TIME: u32 = 1_575_144_000;
const GENESIS_BITS: u32 = 0x1e0f_fff0;
const GENESIS_NONCE: u32 = 2_687_538;

const ALERT_PUBKEY: &str = "04cb76285e728f416f457ffbb1b0ca52b59dbbf51bca1359085b103e18678abc8ff391c40f6019aaa823375d4509009f192738f972677e2cd7ae3ed395ecdef9c9";
const SPORK_PUBKEY: &str = "041f844152b871ebd012d40cc5777218da54fab5e89c2236ff0e88e6f6783d474dc6779b47cba883495bcc7ce99b273503031fffca5bca026a509ab635e3959738";
const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Trusted RSA-2048 style accumulator modulus (2046 bits)
pub const ZEROCOIN_MODULUS: &str = concat!(
    "0404375700190280642877564834290060733064966952686029825726160480510399378934023558163607859992487471",
    "3286253649007889807884008305395642938688878601322916338113712936792524237191859084185773830666103633",
    "9340305492027477874928251483378762606578354323921481763507910993206252658906935703752974112638725443",
    "1354640890113819012884428497441584970844316280101068577292828737234418413727911980502018361474665557",
    "0937282478950476210991623247267444883023113073546749368624193703606634672857626669459940778513365648",
    "1994326157508404983873075064391435308547896575607988384922157830505393806667634662970864029566987342",
    "98578027565127662",
);

const MAIN_PORT: u16 = 16519;

const MAIN_SEED_HOSTS: [[u8; 4]; 8] = [
    [167, 86, 104, 232],
    [164, 68, 110, 103],
    [164, 68, 111, 75],
    [116, 203, 156, 64],
    [159, 69, 190, 7],
    [95, 216, 164, 118],
    [116, 202, 26, 146],
    [164, 68, 106, 143],
];

fn main_checkpoints() -> CheckpointStore {
    CheckpointStore::new(
        &[
            (0, GENESIS_HASH),
            (10, Hash::from_static_hex("000002f8f1f49329c9cc174ddc76d7e0918d01d71a02132fac28d55e90bea536")),
            (100, Hash::from_static_hex("0000064d78ee3bac2c9751804fddcd27586767a088bfab4babf5cbe95657da01")),
            (200, Hash::from_static_hex("000000016c3164195be1837714c83cbbc2264037f37dd9c1047745b84d8b5862")),
            (500, Hash::from_static_hex("9267bf6def4e3ec10578eb93c57be933de36323d3c70f328db1e0c6d0b1a57b3")),
            (1000, Hash::from_static_hex("93ff76ca33649c33d0d7af2f3a32000674b70b52e9c4196707c3500f253f3e34")),
            (2000, Hash::from_static_hex("5e2d64afdb58c2ce40bd544fe07480f0515f680300a3bf82b890d6b2670d41dc")),
            (2163, Hash::from_static_hex("21454ab21a19d24a090cb734ea77a43e2d81c4937c8850d565fb3b9cb1cf3295")),
        ],
        CheckpointSummary {
            last_checkpoint_time: 1_575_480_877,
            transactions_at_checkpoint: 4128,
            transactions_per_day: 3000.0,
        },
    )
}

fn genesis_only_checkpoints(transactions_per_day: f64) -> CheckpointStore {
    CheckpointStore::new(
        &[(0, GENESIS_HASH)],
        CheckpointSummary {
            last_checkpoint_time: GENESIS_TIME as u64,
            transactions_at_checkpoint: 0,
            transactions_per_day,
        },
    )
}

/// The production network. Every other profile derives from this one.
pub fn main_params() -> ChainParams {
    ChainParams {
        network: Network::Main,
        message_start: [0x00, 0x1c, 0x0a, 0x1c],
        default_port: MAIN_PORT,
        alert_pubkey: ALERT_PUBKEY.to_string(),
        pow: ProofOfWork {
            pow_limit: pow_limit(20),
            target_timespan: 2 * 60,
            target_spacing: 2 * 60,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            max_reorganization_depth: 100,
            miner_threads: 0,
        },
        monetary: Monetary {
            subsidy_halving_interval: 4_000_000,
            max_money_out: 5_000_000_000 * COIN,
            maturity: 60,
            stake_min_confirmations: 720,
            stake_min_amount: 50 * COIN,
        },
        masternodes: Masternodes {
            count_drift: 20,
            payments_start_time: 1_516_371_317,
            spork_pubkey: SPORK_PUBKEY.to_string(),
            pool_max_transactions: 3,
            obfuscation_dummy_address: "MqwsjG5JSrKqr5Vr4Pttf3vdTzzjxfHuHR".to_string(),
        },
        activations: Activations {
            last_pow_block: ActivationHeight::at(200),
            modifier_update_block: ActivationHeight::at(1),
            zerocoin_start_height: ActivationHeight::at(101),
            zerocoin_start_time: 1_529_726_034,
            accumulator_start_height: ActivationHeight::at(50),
            enforce_serial_range: ActivationHeight::at(1),
            recalculate_accumulators: ActivationHeight::never(),
            first_fraudulent_block: ActivationHeight::never(),
            last_good_checkpoint: ActivationHeight::never(),
        },
        genesis: GenesisParams {
            timestamp: "November 30 2019 - MONGOcm CRYO Launch".to_string(),
            output_pubkey: GENESIS_OUTPUT_PUBKEY.to_string(),
            reward: 0,
            version: 1,
            time: GENESIS_TIME,
            bits: GENESIS_BITS,
            nonce: GENESIS_NONCE,
            expected_hash: GENESIS_HASH,
            expected_merkle_root: GENESIS_MERKLE_ROOT,
        },
        base58: Base58Prefixes {
            pubkey_address: vec![51],
            script_address: vec![81],
            secret_key: vec![222],
            ext_public_key: vec![0x01, 0x23, 0x1a, 0xa3],
            ext_secret_key: vec![0x03, 0x21, 0x2b, 0xb1],
            ext_coin_type: vec![0x80, 0x00, 0x1e, 0xf0],
        },
        zerocoin: ZerocoinConfig {
            modulus: ZEROCOIN_MODULUS.to_string(),
            max_spends_per_transaction: 7,
            min_mint_fee: ZCENT,
            mint_required_confirmations: 20,
            required_accumulation: 1,
            default_security_level: 100,
            header_version: 4,
            budget_fee_confirmations: 6,
        },
        flags: NetworkFlags {
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        checkpoints: main_checkpoints(),
        fixed_seeds: MAIN_SEED_HOSTS
            .iter()
            .map(|ip| SeedSpec::ipv4(*ip, MAIN_PORT))
            .collect(),
        dns_seeds: MAIN_SEED_HOSTS
            .iter()
            .map(|[a, b, c, d]| {
                let host = format!("{a}.{b}.{c}.{d}");
                DnsSeed::new(&host, &host)
            })
            .collect(),
    }
}

/// Public test network: Main with permissive flags and its own identity
pub fn test_params() -> ChainParams {
    let main = main_params();
    ChainParams {
        network: Network::Test,
        message_start: [0xfa, 0xfb, 0xfc, 0xfd],
        default_port: 11311,
        pow: ProofOfWork {
            enforce_block_upgrade_majority: 51,
            reject_block_outdated_majority: 75,
            to_check_block_upgrade_majority: 100,
            miner_threads: 0,
            target_timespan: 2 * 60,
            target_spacing: 2 * 60,
            ..main.pow
        },
        monetary: Monetary {
            maturity: 15,
            max_money_out: 43_199_500 * COIN,
            stake_min_confirmations: 30,
            stake_min_amount: 1000 * COIN,
            ..main.monetary
        },
        masternodes: Masternodes {
            count_drift: 4,
            payments_start_time: 1_420_837_558,
            pool_max_transactions: 2,
            ..main.masternodes
        },
        activations: Activations {
            last_pow_block: ActivationHeight::at(200),
            modifier_update_block: ActivationHeight::at(51_197),
            zerocoin_start_height: ActivationHeight::at(50),
            zerocoin_start_time: 1_529_726_039,
            enforce_serial_range: ActivationHeight::at(1),
            recalculate_accumulators: ActivationHeight::never(),
            first_fraudulent_block: ActivationHeight::never(),
            last_good_checkpoint: ActivationHeight::never(),
            ..main.activations
        },
        genesis: GenesisParams {
            time: GENESIS_TIME,
            nonce: GENESIS_NONCE,
            ..main.genesis
        },
        base58: Base58Prefixes {
            pubkey_address: vec![110],
            script_address: vec![115],
            secret_key: vec![214],
            ext_public_key: vec![0x3a, 0x2a, 0x12, 0x11],
            ext_secret_key: vec![0x3a, 0x41, 0x11, 0x1a],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        },
        zerocoin: ZerocoinConfig {
            budget_fee_confirmations: 3,
            ..main.zerocoin
        },
        flags: NetworkFlags {
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            ..main.flags
        },
        checkpoints: genesis_only_checkpoints(250.0),
        fixed_seeds: Vec::new(),
        dns_seeds: vec![DnsSeed::new("testnet.mongoc.io", "testnet.mongoc.io")],
        ..main
    }
}

/// Local regression testing: Test with trivial difficulty and on-demand mining
pub fn regtest_params() -> ChainParams {
    let test = test_params();
    ChainParams {
        network: Network::Regtest,
        message_start: [0xf1, 0xf2, 0xf3, 0xf4],
        default_port: 36210,
        pow: ProofOfWork {
            pow_limit: pow_limit(1),
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 1,
            target_timespan: 24 * 60 * 60,
            target_spacing: 2 * 60,
            ..test.pow
        },
        monetary: Monetary {
            subsidy_halving_interval: 150,
            ..test.monetary
        },
        genesis: GenesisParams {
            time: GENESIS_TIME,
            bits: GENESIS_BITS,
            nonce: GENESIS_NONCE,
            ..test.genesis
        },
        flags: NetworkFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..test.flags
        },
        base58: Base58Prefixes {
            pubkey_address: vec![122],
            script_address: vec![19],
            secret_key: vec![239],
            ..test.base58
        },
        checkpoints: genesis_only_checkpoints(100.0),
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        ..test
    }
}

/// In-process unit tests: Main without seeds, mining on demand
pub fn unit_params() -> ChainParams {
    let main = main_params();
    ChainParams {
        network: Network::Unit,
        default_port: 51478,
        flags: NetworkFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..main.flags
        },
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        ..main
    }
}

/// Build the profile for `network`
pub fn build_params(network: Network) -> ChainParams {
    match network {
        Network::Main => main_params(),
        Network::Test => test_params(),
        Network::Regtest => regtest_params(),
        Network::Unit => unit_params(),
    }
}
