//! Commit report codec for the Move ledger's on-chain deserializer.
//!
//! The wire format is four length-prefixed sections in fixed order: token
//! price updates, gas price updates, blessed then unblessed merkle roots,
//! risk-network signatures. Decode must consume the input exactly;
//! trailing bytes fail.

use crate::address::{address_bytes_to_string, address_string_to_bytes, address_to_fixed32};
use crate::wire::{u256_from_le, u256_le};
use alloy_primitives::B256;
use rampcodec_core::{
    ChainSelector, CodecError, CommitReport, CommitReportCodec, GasPriceUpdate, MerkleRootChain,
    PriceUpdates, RmnSignature, SeqNum, SeqNumRange, TokenPriceUpdate,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct WireTokenPriceUpdate {
    token: [u8; 32],
    price: [u8; 32],
}

#[derive(Serialize, Deserialize)]
struct WireGasPriceUpdate {
    chain_selector: u64,
    gas_price: [u8; 32],
}

#[derive(Serialize, Deserialize)]
struct WireMerkleRoot {
    chain_selector: u64,
    on_ramp_address: Vec<u8>,
    seq_num_start: u64,
    seq_num_end: u64,
    merkle_root: [u8; 32],
}

#[derive(Serialize, Deserialize)]
struct WireRmnSignature {
    r: [u8; 32],
    s: [u8; 32],
}

#[derive(Serialize, Deserialize)]
struct WireCommitReport {
    token_price_updates: Vec<WireTokenPriceUpdate>,
    gas_price_updates: Vec<WireGasPriceUpdate>,
    blessed_merkle_roots: Vec<WireMerkleRoot>,
    unblessed_merkle_roots: Vec<WireMerkleRoot>,
    rmn_signatures: Vec<WireRmnSignature>,
}

/// Commit report codec. Stateless; cheap to clone.
#[derive(Debug, Default, Clone)]
pub struct AptosCommitCodec;

impl AptosCommitCodec {
    pub fn new() -> Self {
        Self
    }
}

fn merkle_root_to_wire(root: &MerkleRootChain) -> WireMerkleRoot {
    WireMerkleRoot {
        chain_selector: root.chain_selector.0,
        on_ramp_address: root.on_ramp_address.clone(),
        seq_num_start: root.seq_num_range.start().0,
        seq_num_end: root.seq_num_range.end().0,
        merkle_root: root.merkle_root.0,
    }
}

fn merkle_root_from_wire(wire: WireMerkleRoot) -> MerkleRootChain {
    MerkleRootChain {
        chain_selector: ChainSelector(wire.chain_selector),
        on_ramp_address: wire.on_ramp_address,
        seq_num_range: SeqNumRange::new(SeqNum(wire.seq_num_start), SeqNum(wire.seq_num_end)),
        merkle_root: B256::from(wire.merkle_root),
    }
}

impl CommitReportCodec for AptosCommitCodec {
    fn encode(&self, report: &CommitReport) -> Result<Vec<u8>, CodecError> {
        let token_price_updates = report
            .price_updates
            .token_price_updates
            .iter()
            .map(|update| {
                let parsed = address_string_to_bytes(&update.token_id)
                    .and_then(|bytes| address_to_fixed32(&bytes))
                    .map_err(|e| CodecError::in_field("token price updates", e))?;
                Ok(WireTokenPriceUpdate {
                    token: parsed,
                    price: u256_le(update.price),
                })
            })
            .collect::<Result<Vec<_>, CodecError>>()?;

        let gas_price_updates = report
            .price_updates
            .gas_price_updates
            .iter()
            .map(|update| WireGasPriceUpdate {
                chain_selector: update.chain_selector.0,
                gas_price: u256_le(update.gas_price),
            })
            .collect();

        let wire = WireCommitReport {
            token_price_updates,
            gas_price_updates,
            blessed_merkle_roots: report.blessed_merkle_roots.iter().map(merkle_root_to_wire).collect(),
            unblessed_merkle_roots: report
                .unblessed_merkle_roots
                .iter()
                .map(merkle_root_to_wire)
                .collect(),
            rmn_signatures: report
                .rmn_signatures
                .iter()
                .map(|sig| WireRmnSignature { r: sig.r.0, s: sig.s.0 })
                .collect(),
        };

        bcs::to_bytes(&wire).map_err(|e| CodecError::MalformedEncoding {
            context: "commit report".into(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, data: &[u8]) -> Result<CommitReport, CodecError> {
        let wire: WireCommitReport = bcs::from_bytes(data).map_err(|e| match e {
            bcs::Error::RemainingInput => CodecError::TrailingData {
                context: "commit report".into(),
            },
            other => CodecError::MalformedEncoding {
                context: "commit report".into(),
                reason: other.to_string(),
            },
        })?;

        let token_price_updates = wire
            .token_price_updates
            .into_iter()
            .map(|update| {
                // Long-form rendering: identical accounts render identically
                // on every decode, system addresses included.
                let token_id = address_bytes_to_string(&update.token)
                    .map_err(|e| CodecError::in_field("token price updates", e))?;
                Ok(TokenPriceUpdate {
                    token_id,
                    price: u256_from_le(update.price),
                })
            })
            .collect::<Result<Vec<_>, CodecError>>()?;

        Ok(CommitReport {
            price_updates: PriceUpdates {
                token_price_updates,
                gas_price_updates: wire
                    .gas_price_updates
                    .into_iter()
                    .map(|update| GasPriceUpdate {
                        chain_selector: ChainSelector(update.chain_selector),
                        gas_price: u256_from_le(update.gas_price),
                    })
                    .collect(),
            },
            blessed_merkle_roots: wire
                .blessed_merkle_roots
                .into_iter()
                .map(merkle_root_from_wire)
                .collect(),
            unblessed_merkle_roots: wire
                .unblessed_merkle_roots
                .into_iter()
                .map(merkle_root_from_wire)
                .collect(),
            rmn_signatures: wire
                .rmn_signatures
                .into_iter()
                .map(|sig| RmnSignature {
                    r: B256::from(sig.r),
                    s: B256::from(sig.s),
                })
                .collect(),
        })
    }
}
