//! Compact difficulty encoding
//!
//! Headers carry their target as a 32-bit "compact" float: one size byte
//! followed by a 23-bit mantissa and a sign bit.

use primitive_types::U256;

use crate::crypto::Hash;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Expand a compact target.
///
/// Returns `None` for negative or overflowing encodings, which are never
/// valid targets.
pub fn compact_to_target(compact: u32) -> Option<U256> {
    let size = compact >> 24;
    let mantissa = compact & MANTISSA_MASK;
    let word = if size <= 3 {
        mantissa >> (8 * (3 - size))
    } else {
        mantissa
    };
    if word == 0 {
        return Some(U256::zero());
    }

    let negative = compact & SIGN_BIT != 0;
    let overflow = size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32);
    if negative || overflow {
        return None;
    }

    if size <= 3 {
        Some(U256::from(word))
    } else {
        Some(U256::from(word) << (8 * (size as usize - 3)))
    }
}

/// Encode a target in compact form, losing precision below the top three bytes
pub fn target_to_compact(target: &U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (*target >> (8 * (size - 3))).low_u32()
    };

    // Keep the mantissa positive by moving a byte into the exponent.
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

/// Easiest target allowed: all ones shifted right by `leading_zero_bits`
pub fn pow_limit(leading_zero_bits: u32) -> U256 {
    U256::MAX >> leading_zero_bits as usize
}

/// Hash read as a 256-bit little-endian integer
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Proof-of-work check: the hash is at or below a valid, non-zero target
pub fn meets_target(hash: &Hash, compact: u32) -> bool {
    match compact_to_target(compact) {
        Some(target) if !target.is_zero() => hash_to_u256(hash) <= target,
        _ => false,
    }
}
