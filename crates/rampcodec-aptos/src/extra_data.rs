//! Tagged extra-args and dest-exec-data decoding.
//!
//! The first four bytes of an extra-args blob name the origin family's
//! encoding scheme; the body is BCS. Mandatory leading fields decode
//! strictly. Optional trailing fields decode leniently: encoders of other
//! versions may omit them, but never the mandatory prefix.

use crate::wire::BcsReader;
use rampcodec_core::{CodecError, DestExecData, ExtraArgs, SourceExtraDataDecoder};

/// Tag of the EVM-style V1 scheme (gas limit only).
pub const EVM_EXTRA_ARGS_V1_TAG: [u8; 4] = [0x97, 0xa6, 0x57, 0xc9];
/// Tag of the generic V2 scheme (gas limit + out-of-order flag).
pub const GENERIC_EXTRA_ARGS_V2_TAG: [u8; 4] = [0x18, 0x1d, 0xcf, 0x10];
/// Tag of the SVM-style V1 scheme.
pub const SVM_EXTRA_ARGS_V1_TAG: [u8; 4] = [0x1f, 0x3b, 0x3a, 0xba];

/// Decoder for the BCS-encoded extra-args blobs of messages bound for the
/// Move ledger. Stateless; cheap to clone.
#[derive(Debug, Default, Clone)]
pub struct AptosExtraDataDecoder;

impl AptosExtraDataDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl SourceExtraDataDecoder for AptosExtraDataDecoder {
    fn decode_extra_args(&self, extra_args: &[u8]) -> Result<ExtraArgs, CodecError> {
        if extra_args.len() < 4 {
            return Err(CodecError::InputLength {
                field: "extra args".into(),
                expected: "at least 4 tag bytes".into(),
                got: extra_args.len(),
            });
        }
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&extra_args[..4]);
        let mut reader = BcsReader::new(&extra_args[4..], "extra args");

        match tag {
            EVM_EXTRA_ARGS_V1_TAG => Ok(ExtraArgs::EvmV1 {
                gas_limit: reader.u256()?,
            }),
            GENERIC_EXTRA_ARGS_V2_TAG => {
                let gas_limit = reader.u256()?;
                let allow_out_of_order_execution =
                    if reader.is_empty() { false } else { reader.bool()? };
                Ok(ExtraArgs::GenericV2 {
                    gas_limit,
                    allow_out_of_order_execution,
                })
            }
            SVM_EXTRA_ARGS_V1_TAG => {
                let compute_units = reader.u32()?;
                let account_is_writable_bitmap =
                    if reader.is_empty() { None } else { Some(reader.u64()?) };
                let allow_out_of_order_execution =
                    if reader.is_empty() { false } else { reader.bool()? };
                let token_receiver =
                    if reader.is_empty() { None } else { Some(reader.bytes()?) };
                let accounts = if reader.is_empty() {
                    None
                } else {
                    let count = reader.uleb_len()?;
                    let mut accounts = Vec::with_capacity(count.min(1024));
                    for _ in 0..count {
                        accounts.push(reader.bytes()?);
                    }
                    Some(accounts)
                };
                Ok(ExtraArgs::SvmV1 {
                    compute_units,
                    account_is_writable_bitmap,
                    allow_out_of_order_execution,
                    token_receiver,
                    accounts,
                })
            }
            other => Err(CodecError::UnknownTag {
                tag: hex::encode(other),
            }),
        }
    }

    fn decode_dest_exec_data(&self, dest_exec_data: &[u8]) -> Result<DestExecData, CodecError> {
        let bytes: [u8; 4] = dest_exec_data.try_into().map_err(|_| CodecError::InputLength {
            field: "dest exec data".into(),
            expected: "exactly 4 bytes".into(),
            got: dest_exec_data.len(),
        })?;
        Ok(DestExecData {
            dest_gas_amount: u32::from_le_bytes(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn decode(hex_blob: &str) -> Result<ExtraArgs, CodecError> {
        AptosExtraDataDecoder::new().decode_extra_args(&hex::decode(hex_blob).unwrap())
    }

    #[test]
    fn evm_v1() {
        let args =
            decode("97a657c920a1070000000000000000000000000000000000000000000000000000000000")
                .unwrap();
        assert_eq!(
            args,
            ExtraArgs::EvmV1 { gas_limit: U256::from(500_000u64) }
        );
    }

    #[test]
    fn generic_v2() {
        let args =
            decode("181dcf1020a107000000000000000000000000000000000000000000000000000000000001")
                .unwrap();
        assert_eq!(
            args,
            ExtraArgs::GenericV2 {
                gas_limit: U256::from(500_000u64),
                allow_out_of_order_execution: true,
            }
        );
    }

    #[test]
    fn generic_v2_without_trailing_flag_defaults_false() {
        let args =
            decode("181dcf1020a1070000000000000000000000000000000000000000000000000000000000")
                .unwrap();
        assert!(!args.allow_out_of_order_execution());
    }

    #[test]
    fn svm_v1_single_account() {
        let args = decode(
            "1f3b3abaa0860100ff00000000000000012012345678901234567890123456789012345678901234\
             5678901234567890123401201234567890123456789012345678901212345678901234567890123456789012",
        )
        .unwrap();
        assert_eq!(
            args,
            ExtraArgs::SvmV1 {
                compute_units: 100_000,
                account_is_writable_bitmap: Some(255),
                allow_out_of_order_execution: true,
                token_receiver: Some(
                    hex::decode("1234567890123456789012345678901234567890123456789012345678901234")
                        .unwrap()
                ),
                accounts: Some(vec![hex::decode(
                    "1234567890123456789012345678901212345678901234567890123456789012"
                )
                .unwrap()]),
            }
        );
    }

    #[test]
    fn svm_v1_multiple_accounts() {
        let args = decode(
            "1f3b3abaa0860100ff00000000000000012012345678901234567890123456789012345678901234\
             56789012345678901234022012345678901234567890123456789012123456789012345678901234\
             56789012209ab25d7fff22ac56789012345678901212345678901234567890123456789012",
        )
        .unwrap();
        match args {
            ExtraArgs::SvmV1 { accounts: Some(accounts), .. } => {
                assert_eq!(accounts.len(), 2);
                assert_eq!(
                    accounts[1],
                    hex::decode("9ab25d7fff22ac56789012345678901212345678901234567890123456789012")
                        .unwrap()
                );
            }
            other => panic!("expected SvmV1 with accounts, got {other:?}"),
        }
    }

    #[test]
    fn svm_v1_compute_units_only() {
        let args = decode("1f3b3abaa0860100").unwrap();
        assert_eq!(
            args,
            ExtraArgs::SvmV1 {
                compute_units: 100_000,
                account_is_writable_bitmap: None,
                allow_out_of_order_execution: false,
                token_receiver: None,
                accounts: None,
            }
        );
    }

    #[test]
    fn too_short_fails_input_length() {
        let err = decode("97a6").unwrap_err();
        assert!(matches!(err, CodecError::InputLength { .. }), "{err}");
    }

    #[test]
    fn unknown_tag_is_reported() {
        let err = decode("deadbeef0000000000000000000000000000000000000000000000000000000000000001")
            .unwrap_err();
        match err {
            CodecError::UnknownTag { tag } => assert_eq!(tag, "deadbeef"),
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn truncated_gas_limit_fails() {
        let err = decode("97a657c901000000").unwrap_err();
        assert!(
            err.to_string().contains("not enough bytes remaining to deserialize u256"),
            "{err}"
        );
    }

    #[test]
    fn dest_exec_data_requires_exactly_four_bytes() {
        let decoder = AptosExtraDataDecoder::new();
        let decoded = decoder.decode_dest_exec_data(&10_000u32.to_le_bytes()).unwrap();
        assert_eq!(decoded.dest_gas_amount, 10_000);

        assert!(matches!(
            decoder.decode_dest_exec_data(&[0x01, 0x02, 0x03]),
            Err(CodecError::InputLength { .. })
        ));
        // A 32-byte (u256-width) value is rejected even if it would fit u32.
        assert!(matches!(
            decoder.decode_dest_exec_data(&[0u8; 32]),
            Err(CodecError::InputLength { .. })
        ));
    }
}
