//! Quark chained hash
//!
//! Headers below version 4 are identified by Quark: nine rounds over six
//! SHA-3 candidates (BLAKE, BMW, Grøstl, JH, Keccak, Skein), three of
//! which pick their function from bit 3 of the previous digest. The first
//! 256 bits of the final 512-bit digest are the block hash.

mod bmw;

pub use bmw::bmw512;

use super::Hash;
use sha3::{Digest, Keccak512};
use skein::consts::U64;

/// Bit of the first digest byte that selects a branch
const BRANCH_MASK: u8 = 0x08;

pub fn blake512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data));
    out
}

pub fn groestl512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&groestl::Groestl512::digest(data));
    out
}

pub fn jh512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&jh::Jh512::digest(data));
    out
}

pub fn keccak512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Keccak512::digest(data));
    out
}

pub fn skein512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&skein::Skein512::<U64>::digest(data));
    out
}

/// Quark hash of arbitrary input
pub fn quark_hash(data: &[u8]) -> Hash {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = if h[0] & BRANCH_MASK != 0 {
        groestl512(&h)
    } else {
        skein512(&h)
    };
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = if h[0] & BRANCH_MASK != 0 {
        blake512(&h)
    } else {
        bmw512(&h)
    };
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = if h[0] & BRANCH_MASK != 0 {
        keccak512(&h)
    } else {
        jh512(&h)
    };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    Hash(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // PIVX main network genesis header, a published Quark vector.
    fn pivx_genesis_header() -> Vec<u8> {
        let merkle =
            Hash::from_hex("1b2ef6e2f28be914103a277377ae7729dcd125dfeb8bf97bd5964ba72b6dc39b").unwrap();
        let mut header = Vec::with_capacity(80);
        header.extend_from_slice(&1i32.to_le_bytes());
        header.extend_from_slice(&[0u8; 32]);
        header.extend_from_slice(&merkle.0);
        header.extend_from_slice(&1454124731u32.to_le_bytes());
        header.extend_from_slice(&0x1e0ffff0u32.to_le_bytes());
        header.extend_from_slice(&2402015u32.to_le_bytes());
        header
    }

    #[test]
    fn test_empty_string_vectors() {
        assert_eq!(
            hex::encode(blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
        assert_eq!(
            hex::encode(groestl512(b"")),
            "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
             8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8"
        );
        assert_eq!(
            hex::encode(jh512(b"")),
            "90ecf2f76f9d2c8017d979ad5ab96b87d58fc8fc4b83060f3f900774faa2c8fa\
             be69c5f4ff1ec2b61d6b316941cedee117fb04b1f4c5bc1b919ae841c50eec4f"
        );
        assert_eq!(
            hex::encode(skein512(b"")),
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
             1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        );
        assert_eq!(
            hex::encode(keccak512(b"")),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
             c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
    }

    #[test]
    fn test_known_quark_header() {
        let header = pivx_genesis_header();
        assert_eq!(header.len(), 80);
        assert_eq!(
            quark_hash(&header).to_hex(),
            "0000041e482b9b9691d98eefb48473405c0b8ec31b76df3797c74a78680ef818"
        );
    }

    #[test]
    fn test_multi_block_inputs_are_deterministic() {
        let data: Vec<u8> = (0..300u32).map(|i| i as u8).collect();
        assert_eq!(blake512(&data), blake512(&data));
        assert_ne!(bmw512(&data[..200]), bmw512(&data[..201]));
        assert_ne!(groestl512(&data[..128]), groestl512(&data[..127]));
        assert_ne!(jh512(&data[..64]), jh512(&data[..65]));
        assert_ne!(skein512(&data[..64]), skein512(&data[..65]));
        assert_eq!(quark_hash(&data), quark_hash(&data));
    }
}
