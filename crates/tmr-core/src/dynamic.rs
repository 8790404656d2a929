// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Runtime-Tagged Protected Scalar
// ─────────────────────────────────────────────────────────────────────
//! `ProtectedScalar` holds a `TripleRedundantValue` whose kind is chosen
//! at runtime and then frozen. Writes of any other kind fail with
//! `TypeMismatch` and leave the replicas untouched.

use std::fmt;

use tmr_types::{Replica, TmrError, TmrResult, ValueKind};

use crate::fault::FaultModel;
use crate::protected::{TripleRedundantValue, VoteOutcome};
use crate::scalar::{Scalar, ScalarValue};

macro_rules! protected_scalar {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// A protected scalar whose kind is fixed at construction.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ProtectedScalar {
            $($variant(TripleRedundantValue<$ty>),)*
        }

        impl ProtectedScalar {
            pub fn new(initial: ScalarValue) -> Self {
                match initial {
                    $(ScalarValue::$variant(v) => {
                        ProtectedScalar::$variant(TripleRedundantValue::new(v))
                    })*
                }
            }

            pub fn kind(&self) -> ValueKind {
                match self {
                    $(ProtectedScalar::$variant(_) => ValueKind::$variant,)*
                }
            }
        }
    };
}

protected_scalar! {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! dispatch {
    ($self:expr, $tmr:ident => $body:expr) => {
        match $self {
            ProtectedScalar::I8($tmr) => $body,
            ProtectedScalar::I16($tmr) => $body,
            ProtectedScalar::I32($tmr) => $body,
            ProtectedScalar::I64($tmr) => $body,
            ProtectedScalar::U8($tmr) => $body,
            ProtectedScalar::U16($tmr) => $body,
            ProtectedScalar::U32($tmr) => $body,
            ProtectedScalar::U64($tmr) => $body,
            ProtectedScalar::F32($tmr) => $body,
            ProtectedScalar::F64($tmr) => $body,
        }
    };
}

fn checked<T: Scalar>(expected: ValueKind, value: ScalarValue) -> TmrResult<T> {
    T::from_value(value).ok_or_else(|| TmrError::TypeMismatch {
        expected,
        found: value.kind(),
    })
}

impl ProtectedScalar {
    pub fn read(&self) -> ScalarValue {
        dispatch!(self, tmr => tmr.read().into_value())
    }

    /// Replicate `value` into all three slots.
    ///
    /// Fails with `TypeMismatch` if `value` is not of this scalar's kind.
    pub fn write(&mut self, value: ScalarValue) -> TmrResult<()> {
        let expected = self.kind();
        dispatch!(self, tmr => {
            let v = checked(expected, value)?;
            tmr.write(v);
            Ok(())
        })
    }

    pub fn check_integrity(&self) -> bool {
        dispatch!(self, tmr => tmr.check_integrity())
    }

    pub fn vote(&self) -> VoteOutcome {
        dispatch!(self, tmr => tmr.vote())
    }

    pub fn correct(&mut self) -> bool {
        dispatch!(self, tmr => tmr.correct())
    }

    pub fn replica(&self, which: Replica) -> ScalarValue {
        dispatch!(self, tmr => tmr.replica(which).into_value())
    }

    /// Overwrite one replica with an explicit value of the same kind.
    pub fn inject(&mut self, which: Replica, corrupted: ScalarValue) -> TmrResult<()> {
        let expected = self.kind();
        dispatch!(self, tmr => {
            let v = checked(expected, corrupted)?;
            tmr.inject(which, v);
            Ok(())
        })
    }

    /// Corrupt one replica by flipping one bit with the fault model.
    ///
    /// Returns the corrupted value written into the replica. Float kinds
    /// fail with `InvalidBitPosition` outside [0, 31]; integer kinds treat
    /// out-of-range positions as a no-op.
    pub fn inject_bit_flip(
        &mut self,
        which: Replica,
        bit_position: usize,
    ) -> TmrResult<ScalarValue> {
        dispatch!(self, tmr => {
            let corrupted = tmr.replica(which).corrupt(bit_position)?;
            tmr.inject(which, corrupted);
            Ok(corrupted.into_value())
        })
    }
}

impl fmt::Display for ProtectedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, tmr => fmt::Display::fmt(tmr, f))
    }
}
