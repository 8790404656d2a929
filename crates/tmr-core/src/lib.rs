// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — TMR Core Engine
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Triple modular redundancy for scalar state, and the single-bit fault
//! model used to validate it.
//!
//! # Invariants
//!
//! 1. **Writes are authoritative**: `write` sets all three replicas, so
//!    `check_integrity()` is `true` immediately afterwards.
//!
//! 2. **Votes are order-fixed**: pairs are compared as (A,B), (A,C),
//!    (B,C); with no agreeing pair the vote falls back to replica A.
//!
//! 3. **Correction touches at most one replica**: `correct()` rewrites
//!    only a single outlier of an agreeing pair. It returns `false`, and
//!    mutates nothing, for a consistent triple or for a triple with no
//!    majority.
//!
//! 4. **The kind never changes**: `TripleRedundantValue<T>` fixes it
//!    statically; `ProtectedScalar` rejects a differently typed write with
//!    `TypeMismatch`.
//!
//! Every operation runs in constant time (at most three comparisons)
//! and needs `&mut self` to mutate, so a single owner serialises the
//! read-then-write sequence of `correct()`.

pub mod dynamic;
pub mod fault;
pub mod protected;
pub mod scalar;
pub mod tier;

pub use dynamic::ProtectedScalar;
pub use fault::{
    binary_digits, digit_width, flip_float_bit, flip_integer_bit, FaultModel, IntegerBits,
};
pub use protected::{TripleRedundantValue, VoteOutcome};
pub use scalar::{Scalar, ScalarValue};
pub use tier::{make_protected, make_protected_scalar};

pub use tmr_types::{RedundancyTier, Replica, TmrError, TmrResult, ValueKind};
