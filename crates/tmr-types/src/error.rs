// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — TMR Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

use crate::kind::ValueKind;

/// Root error type for all TMR kernel failures.
///
/// A divergent triple that cannot be repaired is not an error: the
/// `correct()` operation reports it by returning `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TmrError {
    /// A write supplied a value of a different kind than the one the
    /// protected value was created with. Replicas are left untouched.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// Fault injection addressed a bit outside the representation.
    #[error("invalid bit position {position}: must be in [0, {}]", .width - 1)]
    InvalidBitPosition { position: usize, width: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Report could not be serialised.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type TmrResult<T> = Result<T, TmrError>;
