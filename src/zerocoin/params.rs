//! Zerocoin parameter derivation
//!
//! Everything here is derived deterministically from the trusted RSA
//! modulus and a security level, so every node arrives at the same groups
//! and generators without exchanging them. The derivation searches for
//! 1024-bit primes and runs once per process.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::{debug, info};

use super::groups::{group_seed, integer_from_seed, IntegerGroup};
use crate::chainparams::ChainParams;

/// Security level used to build the process-wide parameters
pub const DEFAULT_SECURITY_LEVEL: u32 = 80;

pub const MIN_MODULUS_BITS: u64 = 1023;
pub const MIN_SECURITY_LEVEL: u32 = 80;
pub const MAX_SECURITY_LEVEL: u32 = 128;

const ACCUMULATOR_BASE_CONSTANT: u32 = 31;
const MAX_BASE_ATTEMPTS: u32 = 10_000;
const AUX_STRING: &[u8] = b"1";

/// Accumulator proof-of-knowledge security parameters
pub const K_PRIME: u32 = 160;
pub const K_DPRIME: u32 = 128;

const COIN_COMMITMENT_GROUP: &[u8] = b"COIN_COMMITMENT_GROUP";
const ACCUMULATOR_INTERNAL_COMMITMENT_GROUP: &[u8] = b"ACCUMULATOR_INTERNAL_COMMITMENT_GROUP";
const ACCUMULATOR_QRN_GROUP_G: &[u8] = b"ACCUMULATOR_QRN_COMMITMENT_GROUPG";
const ACCUMULATOR_QRN_GROUP_H: &[u8] = b"ACCUMULATOR_QRN_COMMITMENT_GROUPH";

static ZEROCOIN_PARAMS: OnceCell<ZerocoinParams> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZerocoinError {
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),
    #[error("Modulus of {bits} bits cannot hold a {required}-bit commitment group")]
    ModulusTooSmall { bits: u64, required: u64 },
    #[error("Unsupported security level: {0}")]
    UnsupportedSecurityLevel(u32),
    #[error("Group generation failed: {0}")]
    GroupGeneration(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulatorParams {
    pub modulus: BigUint,
    /// Starting value of every accumulator
    pub base: BigUint,
    /// Generators of the quadratic-residue commitment pair
    pub qrn_g: BigUint,
    pub qrn_h: BigUint,
    /// Group the accumulator proof of knowledge commits in
    pub pok_group: IntegerGroup,
    /// Smallest admissible coin commitment
    pub min_coin_value: BigUint,
    /// Exclusive upper bound on coin commitments, the coin group modulus
    pub max_coin_value: BigUint,
    pub k_prime: u32,
    pub k_dprime: u32,
}

/// The full parameter set handed to the zerocoin proof engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZerocoinParams {
    pub security_level: u32,
    pub zkp_iterations: u32,
    pub zkp_hash_len: u32,
    pub accumulator: AccumulatorParams,
    pub coin_commitment_group: IntegerGroup,
    /// Order equals the coin commitment modulus
    pub serial_number_sok_group: IntegerGroup,
}

impl ZerocoinParams {
    /// Derive every parameter from a decimal modulus
    pub fn derive(modulus: &str, security_level: u32) -> Result<Self, ZerocoinError> {
        let n = parse_modulus(modulus)?;
        let n_bits = n.bits();
        if n_bits < MIN_MODULUS_BITS {
            return Err(ZerocoinError::InvalidModulus(format!(
                "{n_bits} bits, at least {MIN_MODULUS_BITS} required"
            )));
        }

        let (p_len, q_len) = group_lengths(n_bits - 2, security_level)?;
        let seed = |group: &[u8]| group_seed(&n, security_level, AUX_STRING, group);

        let coin_commitment_group = IntegerGroup::from_seed(&seed(COIN_COMMITMENT_GROUP), p_len, q_len)?;
        let serial_number_sok_group = IntegerGroup::from_order(&coin_commitment_group.modulus)?;
        let pok_group = IntegerGroup::from_seed(
            &seed(ACCUMULATOR_INTERNAL_COMMITMENT_GROUP),
            q_len + 300,
            q_len + 1,
        )?;

        let two = BigUint::from(2u32);
        let qrn_bits = (n_bits - 1) as u32;
        let qrn_g = integer_from_seed(qrn_bits, &seed(ACCUMULATOR_QRN_GROUP_G)).modpow(&two, &n);
        let qrn_h = integer_from_seed(qrn_bits, &seed(ACCUMULATOR_QRN_GROUP_H)).modpow(&two, &n);

        let base = accumulator_base(&n)?;
        let coin_bits = coin_commitment_group.modulus.bits();
        let accumulator = AccumulatorParams {
            base,
            qrn_g,
            qrn_h,
            pok_group,
            min_coin_value: BigUint::one() << (coin_bits / 2 + 3),
            max_coin_value: coin_commitment_group.modulus.clone(),
            k_prime: K_PRIME,
            k_dprime: K_DPRIME,
            modulus: n,
        };

        debug!(
            security_level,
            p_len,
            q_len,
            modulus_bits = n_bits,
            sok_modulus_bits = serial_number_sok_group.modulus.bits(),
            "zerocoin parameters derived"
        );
        Ok(Self {
            security_level,
            zkp_iterations: security_level,
            zkp_hash_len: security_level,
            accumulator,
            coin_commitment_group,
            serial_number_sok_group,
        })
    }

    pub fn modulus_bits(&self) -> u64 {
        self.accumulator.modulus.bits()
    }
}

/// Process-wide zerocoin parameters, built from `params` on first use.
///
/// Concurrent first calls derive once; every caller gets the same instance.
/// Later calls ignore `params`.
pub fn zerocoin_params(params: &ChainParams) -> Result<&'static ZerocoinParams, ZerocoinError> {
    ZEROCOIN_PARAMS.get_or_try_init(|| {
        let derived = ZerocoinParams::derive(&params.zerocoin.modulus, DEFAULT_SECURITY_LEVEL)?;
        info!(
            network = %params.network,
            modulus_bits = derived.modulus_bits(),
            security_level = derived.security_level,
            "zerocoin parameters initialized"
        );
        Ok(derived)
    })
}

fn parse_modulus(modulus: &str) -> Result<BigUint, ZerocoinError> {
    if modulus.is_empty() || !modulus.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ZerocoinError::InvalidModulus("not a decimal integer".to_string()));
    }
    BigUint::parse_bytes(modulus.as_bytes(), 10)
        .ok_or_else(|| ZerocoinError::InvalidModulus("not a decimal integer".to_string()))
}

/// Commitment group modulus and order sizes for a security level
fn group_lengths(max_p_len: u64, security_level: u32) -> Result<(u32, u32), ZerocoinError> {
    let (p_len, q_len) = match security_level {
        80 => (1024, 256),
        81..=112 => (2048, 256),
        113..=128 => (3072, 320),
        _ => return Err(ZerocoinError::UnsupportedSecurityLevel(security_level)),
    };
    if u64::from(p_len) > max_p_len {
        return Err(ZerocoinError::ModulusTooSmall {
            bits: max_p_len + 2,
            required: u64::from(p_len) + 2,
        });
    }
    Ok((p_len, q_len))
}

/// First C^2 mod N, C counting up from 31, that is not 1
fn accumulator_base(modulus: &BigUint) -> Result<BigUint, ZerocoinError> {
    let two = BigUint::from(2u32);
    (0..MAX_BASE_ATTEMPTS)
        .map(|i| BigUint::from(ACCUMULATOR_BASE_CONSTANT + i).modpow(&two, modulus))
        .find(|base| !base.is_one())
        .ok_or_else(|| ZerocoinError::InvalidModulus("no accumulator base".to_string()))
}
