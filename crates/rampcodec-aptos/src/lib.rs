//! # rampcodec-aptos
//!
//! The Move-ledger (Aptos) codec set: BCS report codecs, account-address
//! canonicalization, tagged extra-args decoding, and the message hasher
//! whose output matches the offramp's on-chain verifier byte for byte.
//!
//! Everything here is pure and synchronous. Codecs hold no mutable state
//! and are safe to share across threads; the hasher holds only immutable
//! injected collaborators.

pub mod address;
pub mod commit;
pub mod execute;
pub mod extra_data;
pub mod hasher;

mod abi;
mod wire;

pub use address::AptosAddressCodec;
pub use commit::AptosCommitCodec;
pub use execute::AptosExecuteCodec;
pub use extra_data::AptosExtraDataDecoder;
pub use hasher::AptosMessageHasher;

use rampcodec_core::{CodecSet, ExtraDataCodec};
use std::sync::Arc;

/// Compose the full Move-ledger codec capability set.
///
/// `extra_data_codec` is the per-source-chain decoder registry; the execute
/// codec and the hasher both consult it to interpret blobs tagged by their
/// origin family.
pub fn codec_set(extra_data_codec: Arc<dyn ExtraDataCodec>) -> CodecSet {
    CodecSet {
        address_codec: Arc::new(AptosAddressCodec::new()),
        commit_codec: Arc::new(AptosCommitCodec::new()),
        execute_codec: Arc::new(AptosExecuteCodec::new(Arc::clone(&extra_data_codec))),
        message_hasher: Arc::new(AptosMessageHasher::new(extra_data_codec)),
        extra_data_decoder: Arc::new(AptosExtraDataDecoder::new()),
    }
}
