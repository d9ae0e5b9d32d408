//! Prime-order integer groups grown from a seed
//!
//! The modulus and order come from a Shawe-Taylor construction (FIPS 186-3
//! A.1.2) and the generators from the verifiable canonical search of A.2.3.
//! Every byte fed to the hash is fixed, so two nodes holding the same seed
//! derive the same group.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::ZerocoinError;
use crate::consensus::write_var_bytes;
use crate::crypto::{sha256d, Hash};

const HASH_OUTPUT_BITS: u32 = 256;
const MAX_PRIMEGEN_ATTEMPTS: u32 = 10_000;
const MAX_GENERATOR_ATTEMPTS: u32 = 10_000;
const MAX_ORDER_MULTIPLIER: u32 = 10_000;
const ORDER_GROUP_SECURITY_LEVEL: u32 = 128;
const GENERATOR_LABEL: &[u8] = b"ggen";
const SEPARATOR: &[u8] = b"||";

const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];
const MILLER_RABIN_ROUNDS: usize = 20;

/// A subgroup of Z*_p of prime order q with two independent generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerGroup {
    pub modulus: BigUint,
    pub order: BigUint,
    pub g: BigUint,
    pub h: BigUint,
}

impl IntegerGroup {
    /// Derive a group with a `modulus_bits` modulus and `order_bits` order
    pub fn from_seed(seed: &Hash, modulus_bits: u32, order_bits: u32) -> Result<Self, ZerocoinError> {
        let draw = modulus_and_order(seed, modulus_bits, order_bits)?;
        let g = generator(seed, &draw.p_seed, &draw.q_seed, &draw.modulus, &draw.order, 1)?;
        let h = generator(seed, &draw.p_seed, &draw.q_seed, &draw.modulus, &draw.order, 2)?;
        let group = Self {
            modulus: draw.modulus,
            order: draw.order,
            g,
            h,
        };

        if group.modulus.bits() < u64::from(modulus_bits) || group.order.bits() < u64::from(order_bits) {
            return Err(ZerocoinError::GroupGeneration("group parameters are too short"));
        }
        group.check()?;
        Ok(group)
    }

    /// Smallest group whose modulus is `2iq + 1` for the given prime order
    pub fn from_order(order: &BigUint) -> Result<Self, ZerocoinError> {
        for i in 1..MAX_ORDER_MULTIPLIER {
            let modulus = (order * BigUint::from(2 * i)) + BigUint::one();
            if !is_probable_prime(&modulus) {
                continue;
            }

            let seed = group_seed(order, ORDER_GROUP_SECURITY_LEVEL, b"", b"");
            let p_seed = sha256d(seed.as_bytes());
            let q_seed = sha256d(p_seed.as_bytes());
            let g = generator(&seed, &p_seed, &q_seed, &modulus, order, 1)?;
            let h = generator(&seed, &p_seed, &q_seed, &modulus, order, 2)?;
            let group = Self {
                modulus,
                order: order.clone(),
                g,
                h,
            };
            group.check()?;
            return Ok(group);
        }
        Err(ZerocoinError::GroupGeneration("no prime modulus for the given order"))
    }

    /// Both generators have order q and are distinct
    fn check(&self) -> Result<(), ZerocoinError> {
        if !is_probable_prime(&self.modulus) || !is_probable_prime(&self.order) {
            return Err(ZerocoinError::GroupGeneration("group modulus or order is not prime"));
        }
        let hundred = BigUint::from(100u32);
        for gen in [&self.g, &self.h] {
            if !gen.modpow(&self.order, &self.modulus).is_one() || gen.modpow(&hundred, &self.modulus).is_one() {
                return Err(ZerocoinError::GroupGeneration("generator does not have the group order"));
            }
        }
        if self.g == self.h || self.g.is_one() {
            return Err(ZerocoinError::GroupGeneration("generators are not independent"));
        }
        Ok(())
    }
}

/// sha256d(N || "||" || level || "||" || aux || "||" || group)
pub(crate) fn group_seed(modulus: &BigUint, security_level: u32, aux: &[u8], group: &[u8]) -> Hash {
    let mut buf = Vec::with_capacity(512);
    write_var_bytes(&mut buf, &bignum_bytes(modulus));
    write_var_bytes(&mut buf, SEPARATOR);
    buf.extend_from_slice(&security_level.to_le_bytes());
    write_var_bytes(&mut buf, SEPARATOR);
    write_var_bytes(&mut buf, aux);
    write_var_bytes(&mut buf, SEPARATOR);
    write_var_bytes(&mut buf, group);
    sha256d(&buf)
}

/// Little-endian magnitude with a trailing zero byte when the top bit is
/// set, so the value never reads back as negative
pub(crate) fn bignum_bytes(value: &BigUint) -> Vec<u8> {
    let mut bytes = value.to_bytes_le();
    if bytes.last().is_some_and(|b| b & 0x80 != 0) {
        bytes.push(0);
    }
    bytes
}

/// Expand a seed into an integer of exactly `bits` bits
pub(crate) fn integer_from_seed(bits: u32, seed: &Hash) -> BigUint {
    let mut result = BigUint::zero();
    for count in 0..bits.div_ceil(HASH_OUTPUT_BITS) {
        let block = sha256d(seed_add(seed, count).as_bytes());
        result += BigUint::from_bytes_le(block.as_bytes()) << (count * HASH_OUTPUT_BITS);
    }

    let top = BigUint::one() << (bits - 1);
    let low = result % &top;
    top + low
}

/// Draw an integer and step the seed past every block the draw consumed
fn draw(bits: u32, seed: &mut Hash) -> BigUint {
    let value = integer_from_seed(bits, seed);
    *seed = seed_add(seed, bits.div_ceil(HASH_OUTPUT_BITS) + 1);
    value
}

/// Seed read as a little-endian 256-bit counter, plus `n`, wrapping
fn seed_add(seed: &Hash, n: u32) -> Hash {
    let mut bytes = *seed.as_bytes();
    let mut carry = u64::from(n);
    for byte in bytes.iter_mut() {
        if carry == 0 {
            break;
        }
        let sum = u64::from(*byte) + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
    Hash::from_bytes(bytes)
}

struct PrimeDraw {
    prime: BigUint,
    seed: Hash,
    counter: u32,
}

struct ModulusDraw {
    modulus: BigUint,
    order: BigUint,
    p_seed: Hash,
    q_seed: Hash,
}

/// Shawe-Taylor random prime of exactly `bits` bits
fn random_prime(bits: u32, seed: &Hash) -> Result<PrimeDraw, ZerocoinError> {
    if bits < 2 {
        return Err(ZerocoinError::GroupGeneration("prime length is too short"));
    }

    if bits < 33 {
        let mut seed = *seed;
        let mut counter = 0;
        while counter < 4 * bits {
            let c = draw(bits, &mut seed);
            counter += 1;
            let candidate = c
                .to_u32()
                .ok_or(ZerocoinError::GroupGeneration("small prime candidate overflow"))?
                | 1;
            let candidate = BigUint::from(candidate);
            if is_probable_prime(&candidate) {
                return Ok(PrimeDraw {
                    prime: candidate,
                    seed,
                    counter,
                });
            }
        }
        return Err(ZerocoinError::GroupGeneration("small prime search exhausted"));
    }

    let PrimeDraw {
        prime: c0,
        mut seed,
        mut counter,
    } = random_prime(bits.div_ceil(2) + 1, seed)?;

    let one = BigUint::one();
    let two_c0 = &c0 << 1u32;
    let limit = &one << bits;
    let mut t = draw(bits, &mut seed) / &two_c0;

    for _ in 0..MAX_PRIMEGEN_ATTEMPTS {
        if &t * &two_c0 > limit {
            t = (&limit - &one) / &two_c0;
        }
        let c = &t * &two_c0 + &one;
        counter += 1;

        let a = draw((c.bits() - 1) as u32, &mut seed);
        let a = a % (&c - BigUint::from(3u32)) + BigUint::from(2u32);
        let z = a.modpow(&(&t << 1u32), &c);
        if pocklington(&z, &c0, &c) {
            return Ok(PrimeDraw {
                prime: c,
                seed,
                counter,
            });
        }
        t += &one;
    }
    Err(ZerocoinError::GroupGeneration("prime search exhausted"))
}

/// Prime order q of `order_bits` and prime modulus p = 2tqp0 + 1
fn modulus_and_order(seed: &Hash, modulus_bits: u32, order_bits: u32) -> Result<ModulusDraw, ZerocoinError> {
    let PrimeDraw {
        prime: order,
        seed: q_seed,
        ..
    } = random_prime(order_bits, seed)?;
    let PrimeDraw {
        prime: p0,
        seed: mut p_seed,
        counter: mut counter,
    } = random_prime(modulus_bits.div_ceil(2) + 1, &q_seed)?;
    let start = counter;

    let one = BigUint::one();
    let step = (&order * &p0) << 1u32;
    let limit = &one << modulus_bits;
    let floor_t = (&one << (modulus_bits - 1)) / &step;
    let mut t = draw(modulus_bits, &mut p_seed) / &step;

    while counter <= 4 * modulus_bits + start {
        if &t * &step + &one > limit {
            t = floor_t.clone();
        }
        let p = &t * &step + &one;

        let a = draw(modulus_bits, &mut p_seed);
        let a = a % (&p - BigUint::from(3u32)) + BigUint::from(2u32);
        let z = a.modpow(&((&t * &order) << 1u32), &p);
        if pocklington(&z, &p0, &p) {
            return Ok(ModulusDraw {
                modulus: p,
                order,
                p_seed,
                q_seed,
            });
        }
        t += &one;
        counter += 1;
    }
    Err(ZerocoinError::GroupGeneration("group modulus search exhausted"))
}

/// Canonical generator `index` of the order-q subgroup
fn generator(
    seed: &Hash,
    p_seed: &Hash,
    q_seed: &Hash,
    modulus: &BigUint,
    order: &BigUint,
    index: u32,
) -> Result<BigUint, ZerocoinError> {
    let one = BigUint::one();
    let e = (modulus - &one) / order;

    for count in 1..MAX_GENERATOR_ATTEMPTS {
        let mut buf = Vec::with_capacity(128);
        buf.extend_from_slice(seed.as_bytes());
        write_var_bytes(&mut buf, SEPARATOR);
        buf.extend_from_slice(p_seed.as_bytes());
        write_var_bytes(&mut buf, SEPARATOR);
        buf.extend_from_slice(q_seed.as_bytes());
        write_var_bytes(&mut buf, SEPARATOR);
        write_var_bytes(&mut buf, GENERATOR_LABEL);
        write_var_bytes(&mut buf, SEPARATOR);
        buf.extend_from_slice(&index.to_le_bytes());
        write_var_bytes(&mut buf, SEPARATOR);
        buf.extend_from_slice(&count.to_le_bytes());

        let w = BigUint::from_bytes_le(sha256d(&buf).as_bytes());
        let candidate = w.modpow(&e, modulus);
        if candidate > one {
            return Ok(candidate);
        }
    }
    Err(ZerocoinError::GroupGeneration("generator search exhausted"))
}

fn pocklington(z: &BigUint, factor: &BigUint, candidate: &BigUint) -> bool {
    !z.is_zero() && (z - BigUint::one()).gcd(candidate).is_one() && z.modpow(factor, candidate).is_one()
}

/// Miller-Rabin over the first primes as fixed witnesses
pub fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    if *n <= one {
        return false;
    }
    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for a in SMALL_PRIMES.iter().take(MILLER_RABIN_ROUNDS) {
        let mut x = BigUint::from(*a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u32> = (0..60u32).filter(|n| is_probable_prime(&BigUint::from(*n))).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]);
    }

    #[test]
    fn test_composites_rejected() {
        // Carmichael numbers and a square of a large prime
        for n in [561u64, 41041, 825265, 3215031751, 4294967291 * 4294967291] {
            assert!(!is_probable_prime(&BigUint::from(n)), "{n}");
        }
        assert!(is_probable_prime(&BigUint::from(4294967291u64)));
    }

    #[test]
    fn test_mersenne_127_is_prime() {
        let m127 = (BigUint::one() << 127u32) - BigUint::one();
        assert!(is_probable_prime(&m127));
        let m128 = (BigUint::one() << 128u32) - BigUint::one();
        assert!(!is_probable_prime(&m128));
    }

    #[test]
    fn test_seed_add_carries_and_wraps() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xff;
        let added = seed_add(&Hash::from_bytes(bytes), 1);
        assert_eq!(added.as_bytes()[0], 0);
        assert_eq!(added.as_bytes()[1], 1);

        let wrapped = seed_add(&Hash::from_bytes([0xff; 32]), 2);
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(wrapped, Hash::from_bytes(expected));
    }

    #[test]
    fn test_integer_from_seed_has_exact_width() {
        let seed = sha256d(b"seed");
        for bits in [255, 256, 257, 1024, 2045] {
            assert_eq!(integer_from_seed(bits, &seed).bits(), u64::from(bits));
        }
        assert_eq!(integer_from_seed(600, &Hash::from_bytes([0xff; 32])).bits(), 600);
    }

    #[test]
    fn test_random_prime_widths() {
        let seed = sha256d(b"prime");
        for bits in [16, 32, 33, 64, 129] {
            let drawn = random_prime(bits, &seed).unwrap();
            assert_eq!(drawn.prime.bits(), u64::from(bits));
            assert!(is_probable_prime(&drawn.prime));
            assert_ne!(drawn.seed, seed);
        }
        assert!(random_prime(1, &seed).is_err());
    }

    #[test]
    fn test_small_group_from_seed() {
        let group = IntegerGroup::from_seed(&sha256d(b"group"), 256, 64).unwrap();
        assert_eq!(group.modulus.bits(), 256);
        assert_eq!(group.order.bits(), 64);
        assert!(((&group.modulus - BigUint::one()) % &group.order).is_zero());
        assert!(group.g.modpow(&group.order, &group.modulus).is_one());
        assert!(group.h.modpow(&group.order, &group.modulus).is_one());
        assert_ne!(group.g, group.h);
    }

    #[test]
    fn test_group_from_order() {
        let order = random_prime(64, &sha256d(b"order")).unwrap().prime;
        let group = IntegerGroup::from_order(&order).unwrap();
        assert_eq!(group.order, order);
        let k = (&group.modulus - BigUint::one()) / (&order << 1u32);
        assert_eq!(&k * (&order << 1u32) + BigUint::one(), group.modulus);
        assert!(group.g.modpow(&order, &group.modulus).is_one());
    }

    #[test]
    fn test_bignum_sign_byte() {
        assert_eq!(bignum_bytes(&BigUint::from(0x7fu32)), vec![0x7f]);
        assert_eq!(bignum_bytes(&BigUint::from(0x80u32)), vec![0x80, 0x00]);
    }
}
