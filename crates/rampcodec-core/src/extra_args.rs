//! Family-tagged execution arguments.
//!
//! A message's extra-args blob is opaque on the wire; its first four bytes
//! select the origin family's encoding scheme. Decoders turn the blob into
//! this explicit union. Optional trailing fields stay `Option` so call
//! sites, not the decoder, choose the defaulting.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Decoded extra-args, discriminated by the 4-byte scheme tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "camelCase")]
pub enum ExtraArgs {
    /// EVM-style V1: gas limit only.
    EvmV1 { gas_limit: U256 },
    /// Generic V2: gas limit plus an out-of-order-execution flag. Older
    /// encoders omit the trailing flag byte; absence means `false`.
    GenericV2 {
        gas_limit: U256,
        allow_out_of_order_execution: bool,
    },
    /// SVM-style V1. Every field after `compute_units` may be absent in
    /// older encodings.
    SvmV1 {
        compute_units: u32,
        account_is_writable_bitmap: Option<u64>,
        allow_out_of_order_execution: bool,
        token_receiver: Option<Vec<u8>>,
        accounts: Option<Vec<Vec<u8>>>,
    },
}

impl ExtraArgs {
    /// The execution gas limit, for schemes that carry one.
    pub fn gas_limit(&self) -> Option<U256> {
        match self {
            ExtraArgs::EvmV1 { gas_limit } | ExtraArgs::GenericV2 { gas_limit, .. } => {
                Some(*gas_limit)
            }
            ExtraArgs::SvmV1 { .. } => None,
        }
    }

    /// Whether the sender allows execution out of sequence order.
    pub fn allow_out_of_order_execution(&self) -> bool {
        match self {
            ExtraArgs::EvmV1 { .. } => false,
            ExtraArgs::GenericV2 {
                allow_out_of_order_execution,
                ..
            }
            | ExtraArgs::SvmV1 {
                allow_out_of_order_execution,
                ..
            } => *allow_out_of_order_execution,
        }
    }
}

/// Decoded per-token execution data. Untagged on the wire: always a single
/// 32-bit destination gas amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestExecData {
    pub dest_gas_amount: u32,
}
