//! Base58Check encoding against a network's prefixes

use thiserror::Error;

use super::{Base58Type, ChainParams};
use crate::crypto::sha256d;

const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid base58: {0}")]
    InvalidBase58(String),
    #[error("Payload too short")]
    TooShort,
    #[error("Checksum mismatch")]
    BadChecksum,
}

/// Prefix and payload, followed by the first four bytes of their double SHA-256
pub fn encode_base58check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Decode and check the checksum, returning prefix and payload together
pub fn decode_base58check(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let mut data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::TooShort);
    }
    let split = data.len() - CHECKSUM_LEN;
    let checksum = sha256d(&data[..split]);
    if checksum.0[..CHECKSUM_LEN] != data[split..] {
        return Err(AddressError::BadChecksum);
    }
    data.truncate(split);
    Ok(data)
}

impl ChainParams {
    /// Encode a payload (e.g. a key hash) under one of this network's prefixes
    pub fn encode_base58(&self, kind: Base58Type, payload: &[u8]) -> String {
        encode_base58check(self.base58_prefix(kind), payload)
    }

    /// Which address kind of this network `encoded` belongs to, if any
    pub fn address_kind(&self, encoded: &str) -> Option<Base58Type> {
        let data = decode_base58check(encoded).ok()?;
        [Base58Type::PubkeyAddress, Base58Type::ScriptAddress]
            .into_iter()
            .find(|kind| {
                let prefix = self.base58_prefix(*kind);
                data.len() == prefix.len() + 20 && data.starts_with(prefix)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_zero_payload() {
        assert_eq!(
            encode_base58check(&[51], &[0u8; 20]),
            "MXEmDYChDCdgi77RFPzFjPt86j97MwEZsu"
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let encoded = encode_base58check(&[110], &[7u8; 20]);
        let decoded = decode_base58check(&encoded).unwrap();
        assert_eq!(decoded[0], 110);
        assert_eq!(&decoded[1..], &[7u8; 20]);
    }

    #[test]
    fn test_decode_rejects_tampering() {
        let mut encoded = encode_base58check(&[51], &[1u8; 20]);
        let last = encoded.pop().unwrap();
        encoded.push(if last == '1' { '2' } else { '1' });
        assert_eq!(decode_base58check(&encoded), Err(AddressError::BadChecksum));
        assert!(matches!(
            decode_base58check("0OIl"),
            Err(AddressError::InvalidBase58(_))
        ));
    }
}
