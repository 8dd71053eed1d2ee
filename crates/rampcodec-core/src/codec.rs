//! The codec and hasher traits, and the per-family capability set.
//!
//! Every ledger-family crate implements these traits. A call site composes
//! a [`CodecSet`] explicitly and hands it to the report-plugin layer,
//! instead of registering factories in process-global state.
//!
//! # Thread Safety
//! All traits require `Send + Sync`: codecs and hashers are pure functions
//! over immutable inputs and are invoked concurrently from many tasks
//! without additional locking.

use crate::chain::ChainSelector;
use crate::error::CodecError;
use crate::extra_args::{DestExecData, ExtraArgs};
use crate::message::{ExecuteReport, Message};
use crate::report::CommitReport;
use alloy_primitives::B256;
use std::sync::Arc;

/// Canonicalizes a ledger-native account identity between raw bytes and
/// the ledger's fixed-width string form.
pub trait AddressCodec: Send + Sync {
    /// Render raw address bytes in the ledger's canonical string form.
    fn address_bytes_to_string(&self, bytes: &[u8]) -> Result<String, CodecError>;

    /// Parse a canonical address string back into its full-width byte form.
    fn address_string_to_bytes(&self, address: &str) -> Result<Vec<u8>, CodecError>;

    /// Represent a small oracle index the way the ledger's address format
    /// would represent it as a pseudo-address.
    fn oracle_id_as_address_bytes(&self, oracle_id: u8) -> [u8; 32];

    /// Render a transmitter signing key. A distinct address family from
    /// account addresses: plain hex, no prefix.
    fn transmitter_bytes_to_string(&self, bytes: &[u8]) -> String;
}

/// Encodes and decodes the aggregated commit report in the destination
/// ledger's wire format.
pub trait CommitReportCodec: Send + Sync {
    fn encode(&self, report: &CommitReport) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<CommitReport, CodecError>;
}

/// Encodes and decodes the batch execution report in the destination
/// ledger's wire format.
pub trait ExecuteReportCodec: Send + Sync {
    fn encode(&self, report: &ExecuteReport) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<ExecuteReport, CodecError>;
}

/// Computes the canonical 32-byte message digest.
///
/// Every independently operated node must produce the same bytes for the
/// same logical message, and those bytes must equal what the destination
/// ledger's verifier computes on-chain.
pub trait MessageHasher: Send + Sync {
    fn hash(&self, message: &Message) -> Result<B256, CodecError>;
}

/// Decoder for one origin family's tagged extra-args blobs.
pub trait SourceExtraDataDecoder: Send + Sync {
    /// Decode a tagged extra-args blob. Mandatory leading fields decode
    /// strictly; absent optional trailing fields resolve to documented
    /// defaults.
    fn decode_extra_args(&self, extra_args: &[u8]) -> Result<ExtraArgs, CodecError>;

    /// Decode a per-token dest-exec-data blob.
    fn decode_dest_exec_data(&self, dest_exec_data: &[u8]) -> Result<DestExecData, CodecError>;
}

/// The per-source-chain decoder registry consumed by hashers and execute
/// codecs.
///
/// Implementations map a chain selector to the right family decoder; this
/// crate only defines the seam.
pub trait ExtraDataCodec: Send + Sync {
    fn decode_extra_args(
        &self,
        extra_args: &[u8],
        source: ChainSelector,
    ) -> Result<ExtraArgs, CodecError>;

    fn decode_dest_exec_data(
        &self,
        dest_exec_data: &[u8],
        source: ChainSelector,
    ) -> Result<DestExecData, CodecError>;
}

/// One ledger family's full codec capability set.
///
/// Composed explicitly at the call site, one set per destination family.
#[derive(Clone)]
pub struct CodecSet {
    pub address_codec: Arc<dyn AddressCodec>,
    pub commit_codec: Arc<dyn CommitReportCodec>,
    pub execute_codec: Arc<dyn ExecuteReportCodec>,
    pub message_hasher: Arc<dyn MessageHasher>,
    pub extra_data_decoder: Arc<dyn SourceExtraDataDecoder>,
}
