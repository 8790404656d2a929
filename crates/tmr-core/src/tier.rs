// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Redundancy Tier Dispatch
// ─────────────────────────────────────────────────────────────────────

use tmr_types::RedundancyTier;

use crate::dynamic::ProtectedScalar;
use crate::protected::TripleRedundantValue;
use crate::scalar::{Scalar, ScalarValue};

/// Build a protected value under the given tier.
///
/// Both tiers construct the same `TripleRedundantValue`.
pub fn make_protected<T: Scalar>(tier: RedundancyTier, initial: T) -> TripleRedundantValue<T> {
    if tier == RedundancyTier::Enhanced {
        log::debug!("enhanced tier requested for {}: using standard TMR policy", T::KIND);
    }
    TripleRedundantValue::new(initial)
}

/// Runtime-tagged counterpart of [`make_protected`].
pub fn make_protected_scalar(tier: RedundancyTier, initial: ScalarValue) -> ProtectedScalar {
    if tier == RedundancyTier::Enhanced {
        log::debug!(
            "enhanced tier requested for {}: using standard TMR policy",
            initial.kind()
        );
    }
    ProtectedScalar::new(initial)
}
