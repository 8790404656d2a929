// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Replica Selectors and Redundancy Tiers
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three stored copies of a protected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Replica {
    A,
    B,
    C,
}

impl Replica {
    /// Replicas in voting order.
    pub const ALL: [Replica; 3] = [Replica::A, Replica::B, Replica::C];

    pub fn index(self) -> usize {
        match self {
            Replica::A => 0,
            Replica::B => 1,
            Replica::C => 2,
        }
    }
}

impl fmt::Display for Replica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Replica::A => "A",
            Replica::B => "B",
            Replica::C => "C",
        };
        f.write_str(name)
    }
}

/// Replication/voting policy backing a protected value.
///
/// Both tiers currently share identical voting and correction semantics.
/// `Enhanced` is reserved for a richer policy such as checksum-augmented
/// replicas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedundancyTier {
    #[default]
    Standard,
    Enhanced,
}

impl fmt::Display for RedundancyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedundancyTier::Standard => f.write_str("standard"),
            RedundancyTier::Enhanced => f.write_str("enhanced"),
        }
    }
}
