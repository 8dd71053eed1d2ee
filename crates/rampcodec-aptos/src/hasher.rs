//! Message hashing compatible with the Move offramp's on-chain verifier.
//!
//! Fixed-size fields are grouped into nested hashes; the token array is
//! packed manually (see [`crate::abi`]) because the verifier's layout has
//! no dynamic offset words. Every node must produce the same digest for
//! the same logical message, and that digest must equal the offramp's own
//! `calculate_message_hash` result.

use crate::abi::{length_prefixed, word_u256, word_u32, word_u64};
use crate::address::address_to_fixed32;
use alloy_primitives::{keccak256, B256, U256};
use rampcodec_core::{CodecError, ExtraDataCodec, Message, MessageHasher};
use std::sync::Arc;
use tracing::debug;

/// Every leaf hash starts from an all-zero 32-byte domain separator.
const LEAF_DOMAIN_SEPARATOR: [u8; 32] = [0u8; 32];

/// Domain constant separating this ledger family's message hashes from
/// every other family's.
fn message_hash_domain() -> B256 {
    keccak256(b"Any2AptosMessageHashV1")
}

/// A token transfer with its decoded destination gas amount and the
/// canonical 32-byte token address, ready for hashing.
struct TokenTransfer {
    source_pool_address: Vec<u8>,
    dest_token_address: [u8; 32],
    dest_gas_amount: u32,
    extra_data: Vec<u8>,
    amount: U256,
}

/// Message hasher for the Move ledger family.
///
/// Holds only immutable collaborators; safe for concurrent reuse. There is
/// no partial or best-effort hash: any decode or normalization failure
/// aborts the whole computation.
pub struct AptosMessageHasher {
    extra_data_codec: Arc<dyn ExtraDataCodec>,
}

impl AptosMessageHasher {
    pub fn new(extra_data_codec: Arc<dyn ExtraDataCodec>) -> Self {
        Self { extra_data_codec }
    }
}

impl MessageHasher for AptosMessageHasher {
    fn hash(&self, message: &Message) -> Result<B256, CodecError> {
        let source = message.header.source_chain_selector;
        debug!(
            message_id = %message.header.message_id,
            on_ramp = %hex::encode(&message.header.on_ramp),
            "hashing message"
        );

        let mut transfers = Vec::with_capacity(message.token_amounts.len());
        for token in &message.token_amounts {
            let dest_exec = self
                .extra_data_codec
                .decode_dest_exec_data(&token.dest_exec_data, source)
                .map_err(|e| CodecError::in_field("dest exec data", e))?;
            let dest_token_address = address_to_fixed32(&token.dest_token_address)
                .map_err(|e| CodecError::in_field("dest token address", e))?;
            transfers.push(TokenTransfer {
                source_pool_address: token.source_pool_address.clone(),
                dest_token_address,
                dest_gas_amount: dest_exec.dest_gas_amount,
                extra_data: token.extra_data.clone(),
                amount: token.amount,
            });
        }

        let metadata_hash = metadata_hash(
            message.header.source_chain_selector.0,
            message.header.dest_chain_selector.0,
            &message.header.on_ramp,
        );

        let extra_args = self
            .extra_data_codec
            .decode_extra_args(&message.extra_args, source)
            .map_err(|e| CodecError::in_field("extra args", e))?;
        let gas_limit = extra_args.gas_limit().ok_or_else(|| CodecError::MissingField {
            field: "gasLimit".into(),
        })?;

        let receiver = address_to_fixed32(&message.receiver)
            .map_err(|e| CodecError::in_field("receiver", e))?;

        let digest = message_data_hash(
            metadata_hash,
            message.header.message_id,
            receiver,
            message.header.sequence_number.0,
            gas_limit,
            message.header.nonce,
            &message.sender,
            &message.data,
            &transfers,
        );
        debug!(hash = %digest, "computed message hash");
        Ok(digest)
    }
}

/// keccak256(domain ++ source selector ++ dest selector ++ keccak256(on-ramp)).
///
/// The on-ramp hashes in its source-native byte form. Other families
/// left-pad it to 32 bytes here; this one must not.
fn metadata_hash(source_chain_selector: u64, dest_chain_selector: u64, on_ramp: &[u8]) -> B256 {
    let mut preimage = Vec::with_capacity(128);
    preimage.extend_from_slice(message_hash_domain().as_slice());
    preimage.extend_from_slice(&word_u64(source_chain_selector));
    preimage.extend_from_slice(&word_u64(dest_chain_selector));
    preimage.extend_from_slice(keccak256(on_ramp).as_slice());
    keccak256(&preimage)
}

#[allow(clippy::too_many_arguments)]
fn message_data_hash(
    metadata_hash: B256,
    message_id: B256,
    receiver: [u8; 32],
    sequence_number: u64,
    gas_limit: U256,
    nonce: u64,
    sender: &[u8],
    data: &[u8],
    transfers: &[TokenTransfer],
) -> B256 {
    let mut header = Vec::with_capacity(160);
    header.extend_from_slice(message_id.as_slice());
    header.extend_from_slice(&receiver);
    header.extend_from_slice(&word_u64(sequence_number));
    header.extend_from_slice(&word_u256(gas_limit));
    header.extend_from_slice(&word_u64(nonce));
    let header_hash = keccak256(&header);

    let sender_hash = keccak256(sender);
    let data_hash = keccak256(data);

    // Count word, then each transfer packed back to back: no offset words.
    let mut tokens = Vec::new();
    tokens.extend_from_slice(&word_u256(U256::from(transfers.len())));
    for transfer in transfers {
        tokens.extend_from_slice(&length_prefixed(&transfer.source_pool_address));
        tokens.extend_from_slice(&transfer.dest_token_address);
        tokens.extend_from_slice(&word_u32(transfer.dest_gas_amount));
        tokens.extend_from_slice(&length_prefixed(&transfer.extra_data));
        tokens.extend_from_slice(&word_u256(transfer.amount));
    }
    let token_amounts_hash = keccak256(&tokens);

    let mut leaf = Vec::with_capacity(192);
    leaf.extend_from_slice(&LEAF_DOMAIN_SEPARATOR);
    leaf.extend_from_slice(metadata_hash.as_slice());
    leaf.extend_from_slice(header_hash.as_slice());
    leaf.extend_from_slice(sender_hash.as_slice());
    leaf.extend_from_slice(data_hash.as_slice());
    leaf.extend_from_slice(token_amounts_hash.as_slice());
    keccak256(&leaf)
}
