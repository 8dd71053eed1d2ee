//! Wire-format helpers shared by the BCS codecs.
//!
//! Whole reports go through `bcs::to_bytes` / `bcs::from_bytes` on derived
//! wire structs. The incremental [`BcsReader`] exists for the tagged
//! extra-args blobs only: their optional trailing fields may be absent,
//! which the one-shot API cannot express.

use alloy_primitives::U256;
use rampcodec_core::CodecError;

/// BCS encodes u256 as 32 little-endian bytes.
pub(crate) fn u256_le(value: U256) -> [u8; 32] {
    value.to_le_bytes::<32>()
}

pub(crate) fn u256_from_le(bytes: [u8; 32]) -> U256 {
    U256::from_le_bytes(bytes)
}

/// Field-at-a-time reader over a BCS byte stream.
pub(crate) struct BcsReader<'a> {
    input: &'a [u8],
    context: &'static str,
}

impl<'a> BcsReader<'a> {
    pub fn new(input: &'a [u8], context: &'static str) -> Self {
        Self { input, context }
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8], CodecError> {
        if self.input.len() < n {
            return Err(CodecError::MalformedEncoding {
                context: self.context.into(),
                reason: format!("not enough bytes remaining to deserialize {what}"),
            });
        }
        let (head, rest) = self.input.split_at(n);
        self.input = rest;
        Ok(head)
    }

    pub fn u32(&mut self) -> Result<u32, CodecError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4, "u32")?);
        Ok(u32::from_le_bytes(buf))
    }

    pub fn u64(&mut self) -> Result<u64, CodecError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8, "u64")?);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn u256(&mut self) -> Result<U256, CodecError> {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(self.take(32, "u256")?);
        Ok(u256_from_le(buf))
    }

    pub fn bool(&mut self) -> Result<bool, CodecError> {
        match self.take(1, "bool")?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::MalformedEncoding {
                context: self.context.into(),
                reason: format!("invalid bool byte 0x{other:02x}"),
            }),
        }
    }

    /// ULEB128 sequence length. The format caps lengths at u32.
    pub fn uleb_len(&mut self) -> Result<usize, CodecError> {
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.take(1, "uleb128 length")?[0];
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift >= 32 {
                return Err(CodecError::MalformedEncoding {
                    context: self.context.into(),
                    reason: "uleb128 length overflows u32".into(),
                });
            }
        }
        if value > u64::from(u32::MAX) {
            return Err(CodecError::MalformedEncoding {
                context: self.context.into(),
                reason: "uleb128 length overflows u32".into(),
            });
        }
        Ok(value as usize)
    }

    /// A length-prefixed byte vector.
    pub fn bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.uleb_len()?;
        Ok(self.take(len, "byte vector")?.to_vec())
    }
}
