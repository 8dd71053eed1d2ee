//! Fixed-width word encoding for the verifier-compatible hashes.
//!
//! The on-chain verifier packs dynamic token arrays without offset words,
//! so a generic ABI encoder cannot reproduce its bytes. These primitives
//! keep the divergence small and auditable: 32-byte big-endian words and
//! length-prefixed, right-padded byte strings.

use alloy_primitives::U256;

/// A u256 as a 32-byte big-endian word.
pub(crate) fn word_u256(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

/// A u64 left-padded into a 32-byte word.
pub(crate) fn word_u64(value: u64) -> [u8; 32] {
    word_u256(U256::from(value))
}

/// A u32 left-padded into a 32-byte word.
pub(crate) fn word_u32(value: u32) -> [u8; 32] {
    word_u256(U256::from(value))
}

/// A byte string as a 32-byte length word followed by the bytes,
/// right-padded with zeros to a 32-byte multiple.
pub(crate) fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let padded_len = bytes.len().div_ceil(32) * 32;
    let mut out = Vec::with_capacity(32 + padded_len);
    out.extend_from_slice(&word_u256(U256::from(bytes.len())));
    out.extend_from_slice(bytes);
    out.resize(32 + padded_len, 0);
    out
}
