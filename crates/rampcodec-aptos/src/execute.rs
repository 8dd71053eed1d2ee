//! Execution report codec for the Move ledger's offramp deserializer.
//!
//! The on-chain execution report carries exactly one message for one
//! source chain. The gas limit and per-token destination gas amounts are
//! wire fields, extracted on encode from the opaque extra-args and
//! dest-exec-data blobs via the injected per-source-chain registry. Fields
//! the wire omits (fee token, extra args, fee token amount, proof flag
//! bits, derived header fields) decode to their zero values.

use crate::address::address_to_fixed32;
use crate::wire::{u256_from_le, u256_le};
use alloy_primitives::{B256, U256};
use rampcodec_core::{
    ChainReport, ChainSelector, CodecError, ExecuteReport, ExecuteReportCodec, ExtraDataCodec,
    Message, MessageHeader, RampTokenAmount, SeqNum,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
struct WireTokenTransfer {
    source_pool_address: Vec<u8>,
    dest_token_address: [u8; 32],
    dest_gas_amount: u32,
    extra_data: Vec<u8>,
    amount: [u8; 32],
}

#[derive(Serialize, Deserialize)]
struct WireExecuteReport {
    source_chain_selector: u64,
    message_id: [u8; 32],
    header_source_chain_selector: u64,
    dest_chain_selector: u64,
    sequence_number: u64,
    nonce: u64,
    sender: Vec<u8>,
    data: Vec<u8>,
    receiver: [u8; 32],
    gas_limit: [u8; 32],
    token_amounts: Vec<WireTokenTransfer>,
    offchain_token_data: Vec<Vec<u8>>,
    proofs: Vec<[u8; 32]>,
}

/// Execution report codec. Holds the per-source-chain extra-data registry
/// used on encode; immutable and safe for concurrent reuse.
pub struct AptosExecuteCodec {
    extra_data_codec: Arc<dyn ExtraDataCodec>,
}

impl AptosExecuteCodec {
    pub fn new(extra_data_codec: Arc<dyn ExtraDataCodec>) -> Self {
        Self { extra_data_codec }
    }
}

impl ExecuteReportCodec for AptosExecuteCodec {
    fn encode(&self, report: &ExecuteReport) -> Result<Vec<u8>, CodecError> {
        let chain_report = match report.chain_reports.as_slice() {
            [single] => single,
            other => {
                return Err(CodecError::Other(format!(
                    "exactly one chain report expected, got {}",
                    other.len()
                )))
            }
        };
        if chain_report.messages.is_empty() {
            return Err(CodecError::Other("chain report carries no messages".into()));
        }
        if chain_report.offchain_token_data.len() != chain_report.messages.len() {
            return Err(CodecError::Other(format!(
                "offchain token data length {} does not match message count {}",
                chain_report.offchain_token_data.len(),
                chain_report.messages.len()
            )));
        }
        let message = match chain_report.messages.as_slice() {
            [single] => single,
            other => {
                return Err(CodecError::Other(format!(
                    "exactly one message expected, got {}",
                    other.len()
                )))
            }
        };

        let source = chain_report.source_chain_selector;
        let extra_args = self
            .extra_data_codec
            .decode_extra_args(&message.extra_args, source)
            .map_err(|e| CodecError::in_field("extra args", e))?;
        let gas_limit = extra_args.gas_limit().ok_or_else(|| CodecError::MissingField {
            field: "gasLimit".into(),
        })?;

        let receiver = address_to_fixed32(&message.receiver)
            .map_err(|e| CodecError::in_field("receiver", e))?;

        let token_amounts = message
            .token_amounts
            .iter()
            .map(|token| {
                let dest_exec = self
                    .extra_data_codec
                    .decode_dest_exec_data(&token.dest_exec_data, source)
                    .map_err(|e| CodecError::in_field("dest exec data", e))?;
                Ok(WireTokenTransfer {
                    source_pool_address: token.source_pool_address.clone(),
                    dest_token_address: address_to_fixed32(&token.dest_token_address)
                        .map_err(|e| CodecError::in_field("dest token address", e))?,
                    dest_gas_amount: dest_exec.dest_gas_amount,
                    extra_data: token.extra_data.clone(),
                    amount: u256_le(token.amount),
                })
            })
            .collect::<Result<Vec<_>, CodecError>>()?;

        let wire = WireExecuteReport {
            source_chain_selector: source.0,
            message_id: message.header.message_id.0,
            header_source_chain_selector: message.header.source_chain_selector.0,
            dest_chain_selector: message.header.dest_chain_selector.0,
            sequence_number: message.header.sequence_number.0,
            nonce: message.header.nonce,
            sender: message.sender.clone(),
            data: message.data.clone(),
            receiver,
            gas_limit: u256_le(gas_limit),
            token_amounts,
            offchain_token_data: chain_report.offchain_token_data[0].clone(),
            proofs: chain_report.proofs.iter().map(|proof| proof.0).collect(),
        };

        bcs::to_bytes(&wire).map_err(|e| CodecError::MalformedEncoding {
            context: "execution report".into(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, data: &[u8]) -> Result<ExecuteReport, CodecError> {
        let wire: WireExecuteReport = bcs::from_bytes(data).map_err(|e| match e {
            bcs::Error::RemainingInput => CodecError::TrailingData {
                context: "execution report".into(),
            },
            other => CodecError::MalformedEncoding {
                context: "execution report".into(),
                reason: other.to_string(),
            },
        })?;

        let token_amounts = wire
            .token_amounts
            .into_iter()
            .map(|token| {
                // Re-encode the gas amount so the decoded transfer carries a
                // well-formed dest-exec-data blob.
                let dest_exec_data = bcs::to_bytes(&token.dest_gas_amount).map_err(|e| {
                    CodecError::MalformedEncoding {
                        context: "dest exec data".into(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(RampTokenAmount {
                    source_pool_address: token.source_pool_address,
                    dest_token_address: token.dest_token_address.to_vec(),
                    extra_data: token.extra_data,
                    amount: u256_from_le(token.amount),
                    dest_exec_data,
                })
            })
            .collect::<Result<Vec<_>, CodecError>>()?;

        let message = Message {
            header: MessageHeader {
                message_id: B256::from(wire.message_id),
                source_chain_selector: ChainSelector(wire.header_source_chain_selector),
                dest_chain_selector: ChainSelector(wire.dest_chain_selector),
                sequence_number: SeqNum(wire.sequence_number),
                nonce: wire.nonce,
                // Derived fields are not on the wire.
                msg_hash: B256::ZERO,
                on_ramp: Vec::new(),
            },
            sender: wire.sender,
            data: wire.data,
            receiver: wire.receiver.to_vec(),
            extra_args: Vec::new(),
            fee_token: Vec::new(),
            fee_token_amount: U256::ZERO,
            token_amounts,
        };

        Ok(ExecuteReport {
            chain_reports: vec![ChainReport {
                source_chain_selector: ChainSelector(wire.source_chain_selector),
                messages: vec![message],
                offchain_token_data: vec![wire.offchain_token_data],
                proofs: wire.proofs.into_iter().map(B256::from).collect(),
                proof_flag_bits: U256::ZERO,
            }],
        })
    }
}
