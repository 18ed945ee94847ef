//! Minimal Solidity ABI encoding.
//!
//! Only what the two contracts need: zero-argument calls, a single address
//! argument, and `uint256` / `string` return values.

use primitive_types::U256;
use sha3::{Digest, Keccak256};
use thiserror::Error;

use crate::address::Address;

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Errors decoding contract return data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("Return data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Offset or length out of range")]
    OutOfRange,

    #[error("String is not valid UTF-8")]
    InvalidUtf8,
}

/// The 4-byte selector of a canonical function signature such as
/// `balanceOf(address)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Calldata for a function that takes no arguments.
pub fn encode_call(signature: &str) -> Vec<u8> {
    selector(signature).to_vec()
}

/// Calldata for a function whose only argument is an address.
pub fn encode_address_call(signature: &str, address: &Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD_SIZE);
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&address.to_abi_word());
    data
}

/// Decode a single `uint256` return value.
pub fn decode_uint256(data: &[u8]) -> Result<U256, AbiError> {
    let word = word_at(data, 0)?;
    Ok(U256::from_big_endian(word))
}

/// Decode a single dynamic `string` return value.
pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    let offset = word_as_usize(word_at(data, 0)?)?;
    let length = word_as_usize(word_at(data, offset)?)?;

    let start = offset.checked_add(WORD_SIZE).ok_or(AbiError::OutOfRange)?;
    let end = start.checked_add(length).ok_or(AbiError::OutOfRange)?;
    if end > data.len() {
        return Err(AbiError::TooShort {
            expected: end,
            actual: data.len(),
        });
    }

    String::from_utf8(data[start..end].to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

fn word_at(data: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    let end = offset.checked_add(WORD_SIZE).ok_or(AbiError::OutOfRange)?;
    data.get(offset..end).ok_or(AbiError::TooShort {
        expected: end,
        actual: data.len(),
    })
}

fn word_as_usize(word: &[u8]) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(word);
    if value > U256::from(u32::MAX) {
        return Err(AbiError::OutOfRange);
    }
    Ok(value.as_u32() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_string(s: &str) -> Vec<u8> {
        let mut data = vec![0u8; WORD_SIZE];
        data[31] = 0x20;
        let mut len = [0u8; WORD_SIZE];
        len[31] = s.len() as u8;
        data.extend_from_slice(&len);
        let mut body = s.as_bytes().to_vec();
        body.resize(s.len().div_ceil(WORD_SIZE) * WORD_SIZE, 0);
        data.extend_from_slice(&body);
        data
    }

    #[test]
    fn test_known_selectors() {
        assert_eq!(hex::encode(selector("mint()")), "1249c58b");
        assert_eq!(hex::encode(selector("claim()")), "4e71d92d");
        assert_eq!(hex::encode(selector("balanceOf(address)")), "70a08231");
        assert_eq!(hex::encode(selector("name()")), "06fdde03");
    }

    #[test]
    fn test_encode_address_call_layout() {
        let addr: Address = "0xa1d482f27b4c10aab960c2927965e1beceead456".parse().unwrap();
        let data = encode_address_call("balanceOf(address)", &addr);
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(&data[16..], addr.as_bytes());
    }

    #[test]
    fn test_decode_uint256() {
        let mut word = [0u8; WORD_SIZE];
        word[30] = 0x01;
        word[31] = 0x02;
        assert_eq!(decode_uint256(&word).unwrap(), U256::from(0x0102u64));
    }

    #[test]
    fn test_decode_uint256_short_data() {
        assert_eq!(
            decode_uint256(&[0u8; 4]),
            Err(AbiError::TooShort {
                expected: 32,
                actual: 4
            })
        );
    }

    #[test]
    fn test_decode_string() {
        let data = encode_string("AvalPlay Token");
        assert_eq!(decode_string(&data).unwrap(), "AvalPlay Token");
    }

    #[test]
    fn test_decode_empty_string() {
        let data = encode_string("");
        assert_eq!(decode_string(&data).unwrap(), "");
    }

    #[test]
    fn test_decode_string_truncated_body() {
        let mut data = encode_string("AvalPlay Token");
        data.truncate(70);
        assert!(matches!(
            decode_string(&data),
            Err(AbiError::TooShort { .. })
        ));
    }

    #[test]
    fn test_decode_string_huge_offset() {
        let data = [0xffu8; 64];
        assert_eq!(decode_string(&data), Err(AbiError::OutOfRange));
    }
}
