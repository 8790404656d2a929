// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Triple Redundant Value (Vote + Correct)
// ─────────────────────────────────────────────────────────────────────
//! Three replicas of one scalar, read back through a majority vote and
//! repaired in place when exactly one replica diverges.
//!
//! # Voting order
//!
//! Replicas are compared pairwise in the fixed order (A,B), (A,C), (B,C).
//! The first agreeing pair wins. When all three differ there is no
//! majority and A is returned as-is. Correction uses the same order and
//! only ever rewrites the single outlier.

use std::fmt;

use tmr_types::Replica;

use crate::scalar::Scalar;

/// Classification of the current replica triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// All three replicas agree.
    Unanimous,
    /// Two replicas agree; `outlier` differs from them.
    Majority { outlier: Replica },
    /// All three replicas are pairwise distinct.
    NoMajority,
}

/// A scalar stored as three replicas.
///
/// The kind is fixed by `T`, so a write of a different kind does not
/// type-check. See `ProtectedScalar` for the runtime-tagged form.
#[derive(Debug, Clone, PartialEq)]
pub struct TripleRedundantValue<T: Scalar> {
    copies: [T; 3],
}

impl<T: Scalar> TripleRedundantValue<T> {
    /// Replicate `initial` into all three slots.
    pub fn new(initial: T) -> Self {
        Self {
            copies: [initial; 3],
        }
    }

    /// Authoritative write: all three replicas take `value`.
    pub fn write(&mut self, value: T) {
        log::trace!("tmr write ({}): {value}", T::KIND);
        self.copies = [value; 3];
    }

    /// Majority-voted value.
    #[allow(clippy::if_same_then_else)]
    pub fn read(&self) -> T {
        let [a, b, c] = self.copies;
        if a.same(b) {
            a
        } else if a.same(c) {
            a
        } else if b.same(c) {
            b
        } else {
            a
        }
    }

    /// `true` iff all three replicas hold the same bit pattern.
    pub fn check_integrity(&self) -> bool {
        let [a, b, c] = self.copies;
        a.same(b) && b.same(c)
    }

    pub fn vote(&self) -> VoteOutcome {
        let [a, b, c] = self.copies;
        let (ab, ac, bc) = (a.same(b), a.same(c), b.same(c));
        if ab && bc {
            VoteOutcome::Unanimous
        } else if ab {
            VoteOutcome::Majority {
                outlier: Replica::C,
            }
        } else if ac {
            VoteOutcome::Majority {
                outlier: Replica::B,
            }
        } else if bc {
            VoteOutcome::Majority {
                outlier: Replica::A,
            }
        } else {
            VoteOutcome::NoMajority
        }
    }

    /// Repair a single divergent replica from the agreeing pair.
    ///
    /// Returns `true` only if a replica was rewritten. An already
    /// consistent triple and a triple with no majority are both left
    /// untouched and return `false`.
    pub fn correct(&mut self) -> bool {
        match self.vote() {
            VoteOutcome::Majority { outlier } => {
                let source = match outlier {
                    Replica::A => Replica::B,
                    Replica::B | Replica::C => Replica::A,
                };
                let good = self.copies[source.index()];
                log::warn!(
                    "tmr correction ({}): replica {outlier} {} -> {good}",
                    T::KIND,
                    self.copies[outlier.index()]
                );
                self.copies[outlier.index()] = good;
                true
            }
            VoteOutcome::Unanimous => false,
            VoteOutcome::NoMajority => {
                let [a, b, c] = self.copies;
                log::error!(
                    "tmr uncorrectable divergence ({}): [{a}, {b}, {c}]",
                    T::KIND
                );
                false
            }
        }
    }

    pub fn replica(&self, which: Replica) -> T {
        self.copies[which.index()]
    }

    pub fn replicas(&self) -> [T; 3] {
        self.copies
    }

    /// Overwrite one replica, bypassing replication.
    ///
    /// This is how a fault harness lands a corrupted value.
    pub fn inject(&mut self, which: Replica, corrupted: T) {
        log::debug!(
            "tmr inject ({}): replica {which} {} -> {corrupted}",
            T::KIND,
            self.copies[which.index()]
        );
        self.copies[which.index()] = corrupted;
    }
}

impl<T: Scalar> fmt::Display for TripleRedundantValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.copies;
        write!(f, "TMR({}) [copies: {a}, {b}, {c}]", self.read())
    }
}
