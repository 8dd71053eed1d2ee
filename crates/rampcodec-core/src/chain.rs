//! Chain selector and message sequence-number types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique 64-bit identifier of a ledger in the cross-chain network.
/// Selectors are protocol-assigned constants, not VM chain IDs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainSelector(pub u64);

impl From<u64> for ChainSelector {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-source-chain monotonically assigned message sequence number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SeqNum(pub u64);

impl From<u64> for SeqNum {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of sequence numbers covered by a merkle root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeqNumRange {
    start: SeqNum,
    end: SeqNum,
}

impl SeqNumRange {
    pub fn new(start: SeqNum, end: SeqNum) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> SeqNum {
        self.start
    }

    pub fn end(&self) -> SeqNum {
        self.end
    }
}

impl fmt::Display for SeqNumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
