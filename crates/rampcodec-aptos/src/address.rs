//! Aptos account-address canonicalization.
//!
//! Account addresses are 32-byte values rendered as `0x` plus 64 hex
//! digits. Shorter byte forms are the low-order bytes of the 32-byte
//! big-endian value; rendering always restores the full-width long form so
//! identical accounts render identically on every decode, system addresses
//! included.

use rampcodec_core::{AddressCodec, CodecError};

/// Width of an account address in bytes.
pub const ADDRESS_LEN: usize = 32;

/// Render raw address bytes as the long-form `0x` + 64 hex string.
///
/// Valid input is 1..=32 bytes; shorter inputs are left-zero-padded.
pub fn address_bytes_to_string(bytes: &[u8]) -> Result<String, CodecError> {
    if bytes.is_empty() || bytes.len() > ADDRESS_LEN {
        return Err(CodecError::InputLength {
            field: "address".into(),
            expected: "1..=32 bytes".into(),
            got: bytes.len(),
        });
    }
    Ok(format!("0x{}", hex::encode(address_to_fixed32(bytes)?)))
}

/// Parse an optionally `0x`-prefixed hex address of 1..=64 digits into the
/// full 32-byte form.
pub fn address_string_to_bytes(address: &str) -> Result<Vec<u8>, CodecError> {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    if digits.is_empty() || digits.len() > 2 * ADDRESS_LEN {
        return Err(CodecError::InputLength {
            field: "address string".into(),
            expected: "1..=64 hex digits".into(),
            got: digits.len(),
        });
    }
    let padded = format!("{digits:0>64}");
    hex::decode(&padded).map_err(|e| CodecError::MalformedEncoding {
        context: "address string".into(),
        reason: e.to_string(),
    })
}

/// Right-align raw address bytes into a fixed 32-byte buffer.
pub fn address_to_fixed32(bytes: &[u8]) -> Result<[u8; 32], CodecError> {
    if bytes.len() > ADDRESS_LEN {
        return Err(CodecError::InputLength {
            field: "address".into(),
            expected: "at most 32 bytes".into(),
            got: bytes.len(),
        });
    }
    let mut out = [0u8; ADDRESS_LEN];
    out[ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// An oracle index as a pseudo-address: all zeros except the last four
/// bytes, which hold the id as a big-endian u32.
pub fn oracle_id_as_address_bytes(oracle_id: u8) -> [u8; 32] {
    let mut out = [0u8; ADDRESS_LEN];
    out[ADDRESS_LEN - 4..].copy_from_slice(&u32::from(oracle_id).to_be_bytes());
    out
}

/// Render transmitter signing-key bytes as plain hex, no `0x` prefix.
pub fn transmitter_bytes_to_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// [`AddressCodec`] over the free functions in this module.
/// Stateless; cheap to clone.
#[derive(Debug, Default, Clone)]
pub struct AptosAddressCodec;

impl AptosAddressCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for AptosAddressCodec {
    fn address_bytes_to_string(&self, bytes: &[u8]) -> Result<String, CodecError> {
        address_bytes_to_string(bytes)
    }

    fn address_string_to_bytes(&self, address: &str) -> Result<Vec<u8>, CodecError> {
        address_string_to_bytes(address)
    }

    fn oracle_id_as_address_bytes(&self, oracle_id: u8) -> [u8; 32] {
        oracle_id_as_address_bytes(oracle_id)
    }

    fn transmitter_bytes_to_string(&self, bytes: &[u8]) -> String {
        transmitter_bytes_to_string(bytes)
    }
}
