//! Commit report model: aggregated price updates and merkle roots of
//! pending cross-chain messages.

use crate::chain::{ChainSelector, SeqNumRange};
use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

/// A price observation for a single token, keyed by the token's canonical
/// address string on the destination ledger.
///
/// `price` is always an explicit integer. Zero is a real observation, never
/// an "unset" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPriceUpdate {
    pub token_id: String,
    pub price: U256,
}

/// A gas price observation for one remote chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceUpdate {
    pub chain_selector: ChainSelector,
    pub gas_price: U256,
}

/// Price updates carried by a commit report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceUpdates {
    pub token_price_updates: Vec<TokenPriceUpdate>,
    pub gas_price_updates: Vec<GasPriceUpdate>,
}

/// A merkle root over an inclusive sequence-number range of messages from
/// one source chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MerkleRootChain {
    pub chain_selector: ChainSelector,
    /// On-ramp address in its source-native byte form; width varies by
    /// source family.
    pub on_ramp_address: Vec<u8>,
    pub seq_num_range: SeqNumRange,
    pub merkle_root: B256,
}

/// An ECDSA signature from the independent risk-management network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RmnSignature {
    pub r: B256,
    pub s: B256,
}

/// The aggregated commit report submitted to the destination ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitReport {
    pub price_updates: PriceUpdates,
    /// Roots vouched for by the risk-management network.
    pub blessed_merkle_roots: Vec<MerkleRootChain>,
    pub unblessed_merkle_roots: Vec<MerkleRootChain>,
    pub rmn_signatures: Vec<RmnSignature>,
}
