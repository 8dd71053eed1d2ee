//! Execute report model: fully specified cross-chain messages with their
//! token transfers and inclusion proofs.

use crate::chain::{ChainSelector, SeqNum};
use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

/// Routing header of a cross-chain message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageHeader {
    pub message_id: B256,
    pub source_chain_selector: ChainSelector,
    pub dest_chain_selector: ChainSelector,
    pub sequence_number: SeqNum,
    pub nonce: u64,
    /// Derived, not a wire field: zero after decode until the report layer
    /// recomputes it.
    pub msg_hash: B256,
    /// Contextual, not a wire field: the source chain's on-ramp address in
    /// its native byte form.
    pub on_ramp: Vec<u8>,
}

/// A token transfer riding along with a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RampTokenAmount {
    pub source_pool_address: Vec<u8>,
    pub dest_token_address: Vec<u8>,
    pub extra_data: Vec<u8>,
    pub amount: U256,
    /// Opaque per-token execution data, decoded by the source family's
    /// extra-data decoder.
    pub dest_exec_data: Vec<u8>,
}

/// One executable cross-chain message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    pub header: MessageHeader,
    pub sender: Vec<u8>,
    pub data: Vec<u8>,
    pub receiver: Vec<u8>,
    /// Tagged extra-args blob; see [`crate::extra_args::ExtraArgs`].
    pub extra_args: Vec<u8>,
    pub fee_token: Vec<u8>,
    pub fee_token_amount: U256,
    pub token_amounts: Vec<RampTokenAmount>,
}

/// All messages being executed for one source chain, with their proofs.
///
/// `offchain_token_data` carries exactly one entry per message; an empty
/// inner list is a valid placeholder for a message without attestations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainReport {
    pub source_chain_selector: ChainSelector,
    pub messages: Vec<Message>,
    pub offchain_token_data: Vec<Vec<Vec<u8>>>,
    pub proofs: Vec<B256>,
    pub proof_flag_bits: U256,
}

/// The batch execution report submitted for on-chain delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecuteReport {
    pub chain_reports: Vec<ChainReport>,
}
