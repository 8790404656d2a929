// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Protectable Scalars
// ─────────────────────────────────────────────────────────────────────
//! The `Scalar` trait ties each supported Rust numeric type to its
//! `ValueKind` tag, and `ScalarValue` is the tagged form used where the
//! kind is only known at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use tmr_types::ValueKind;

use crate::fault::FaultModel;

/// A numeric type that can be protected by triple redundancy.
pub trait Scalar:
    Copy + PartialEq + fmt::Debug + fmt::Display + FaultModel + Send + Sync + 'static
{
    const KIND: ValueKind;

    fn into_value(self) -> ScalarValue;

    /// Returns `None` if `value` is of a different kind.
    fn from_value(value: ScalarValue) -> Option<Self>;

    /// Replica agreement: identical bit patterns.
    ///
    /// For floats this differs from `==`: a NaN agrees with the same NaN
    /// and `0.0` does not agree with `-0.0`.
    fn same(self, other: Self) -> bool;
}

/// A scalar tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ScalarValue {
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

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident, |$a:ident, $b:ident| $same:expr);* $(;)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                #[inline]
                fn same(self, other: Self) -> bool {
                    let ($a, $b) = (self, other);
                    $same
                }

                fn into_value(self) -> ScalarValue {
                    ScalarValue::$variant(self)
                }

                fn from_value(value: ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for ScalarValue {
                fn from(v: $ty) -> Self {
                    ScalarValue::$variant(v)
                }
            }
        )*

        impl ScalarValue {
            pub fn kind(&self) -> ValueKind {
                match self {
                    $(ScalarValue::$variant(_) => ValueKind::$variant,)*
                }
            }

            /// Same kind and same bit pattern; see `Scalar::same`.
            pub fn same(&self, other: &ScalarValue) -> bool {
                match (*self, *other) {
                    $((ScalarValue::$variant(x), ScalarValue::$variant(y)) => x.same(y),)*
                    _ => false,
                }
            }
        }

        impl fmt::Display for ScalarValue {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(ScalarValue::$variant(v) => write!(f, "{v}"),)*
                }
            }
        }
    };
}

impl_scalar! {
    i8 => I8, |a, b| a == b;
    i16 => I16, |a, b| a == b;
    i32 => I32, |a, b| a == b;
    i64 => I64, |a, b| a == b;
    u8 => U8, |a, b| a == b;
    u16 => U16, |a, b| a == b;
    u32 => U32, |a, b| a == b;
    u64 => U64, |a, b| a == b;
    f32 => F32, |a, b| a.to_bits() == b.to_bits();
    f64 => F64, |a, b| a.to_bits() == b.to_bits();
}
