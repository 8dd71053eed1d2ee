//! # rampcodec-core
//!
//! Chain-agnostic report model, codec traits, and shared primitives for the
//! RampCodec crates. Every ledger-family codec set (address codec, report
//! codecs, message hasher, extra-data decoder) is built on the interfaces
//! defined here; a call site composes one [`codec::CodecSet`] per family and
//! hands it to the report-plugin layer.

pub mod chain;
pub mod codec;
pub mod error;
pub mod extra_args;
pub mod message;
pub mod report;

pub use chain::{ChainSelector, SeqNum, SeqNumRange};
pub use codec::{
    AddressCodec, CodecSet, CommitReportCodec, ExecuteReportCodec, ExtraDataCodec, MessageHasher,
    SourceExtraDataDecoder,
};
pub use error::CodecError;
pub use extra_args::{DestExecData, ExtraArgs};
pub use message::{ChainReport, ExecuteReport, Message, MessageHeader, RampTokenAmount};
pub use report::{
    CommitReport, GasPriceUpdate, MerkleRootChain, PriceUpdates, RmnSignature, TokenPriceUpdate,
};
