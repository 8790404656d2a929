// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Single-Bit Fault Model
// ─────────────────────────────────────────────────────────────────────
//! Pure bit-flip transforms used to simulate single-event upsets.
//!
//! Two conventions coexist and both are kept exactly:
//!
//! - **Integers** are written as a base-2 digit string, left zero-padded
//!   to at least 32 digits (never truncated). `bit_position` indexes that
//!   string from the most-significant (leftmost) digit. A position past
//!   the end of the string is a no-op.
//! - **Floats** are reinterpreted as the `u32` of their big-endian
//!   IEEE-754 single-precision encoding and bit `bit_position` is flipped
//!   counting from the least-significant bit. Positions outside [0, 31]
//!   are rejected with `InvalidBitPosition`.
//!
//! So position 31 is the integer LSB but the float sign bit. Callers that
//! need a single convention must translate positions themselves.
//!
//! The model never touches a protected value. Callers write the result
//! into the replica they are corrupting.

use tmr_types::{TmrError, TmrResult};

/// Minimum digit width of the integer bit string.
pub const MIN_DIGIT_WIDTH: usize = 32;

/// Width of the float bit pattern.
pub const FLOAT_BITS: usize = 32;

/// Fixed-width two's-complement view of an integer type.
///
/// Non-negative values map to their natural binary digits; negative
/// values map to their two's-complement pattern at the type's width.
pub trait IntegerBits: Copy {
    const BITS: u32;

    fn to_pattern(self) -> u64;

    /// Inverse of `to_pattern`; bits above `BITS` are discarded.
    fn from_pattern(pattern: u64) -> Self;
}

macro_rules! impl_integer_bits {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl IntegerBits for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_pattern(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline]
                fn from_pattern(pattern: u64) -> Self {
                    pattern as $unsigned as $ty
                }
            }
        )*
    };
}

impl_integer_bits! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
}

/// Number of digits in the padded base-2 string of `value`.
pub fn digit_width<T: IntegerBits>(value: T) -> usize {
    let natural = (u64::BITS - value.to_pattern().leading_zeros()) as usize;
    natural.max(MIN_DIGIT_WIDTH)
}

/// The padded base-2 string the integer fault model indexes into.
pub fn binary_digits<T: IntegerBits>(value: T) -> String {
    format!(
        "{:0width$b}",
        value.to_pattern(),
        width = digit_width(value)
    )
}

/// Flip one digit of the padded base-2 string of `value`.
///
/// Position 0 is the leftmost digit. Positions at or past the string's
/// length return `value` unchanged. A padding digit above the type's
/// width cannot be represented and is also left unchanged.
///
/// Flipping the leading `1` of a value wider than 32 digits shortens the
/// string, so flipping the same position again does not restore it.
pub fn flip_integer_bit<T: IntegerBits>(value: T, bit_position: usize) -> T {
    let width = digit_width(value);
    if bit_position >= width {
        return value;
    }
    let shift = (width - 1 - bit_position) as u32;
    if shift >= T::BITS {
        return value;
    }
    T::from_pattern(value.to_pattern() ^ (1u64 << shift))
}

/// Flip bit `bit_position` (LSB = 0) of the IEEE-754 single-precision
/// encoding of `value`.
pub fn flip_float_bit(value: f32, bit_position: usize) -> TmrResult<f32> {
    if bit_position >= FLOAT_BITS {
        return Err(TmrError::InvalidBitPosition {
            position: bit_position,
            width: FLOAT_BITS,
        });
    }
    let pattern = u32::from_be_bytes(value.to_be_bytes());
    let flipped = pattern ^ (1u32 << bit_position);
    Ok(f32::from_be_bytes(flipped.to_be_bytes()))
}

/// Kind-directed corruption: integers use the digit-string convention,
/// floats the IEEE-754 convention.
pub trait FaultModel: Sized {
    fn corrupt(self, bit_position: usize) -> TmrResult<Self>;
}

macro_rules! impl_integer_fault {
    ($($ty:ty),*) => {
        $(
            impl FaultModel for $ty {
                #[inline]
                fn corrupt(self, bit_position: usize) -> TmrResult<Self> {
                    Ok(flip_integer_bit(self, bit_position))
                }
            }
        )*
    };
}

impl_integer_fault!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FaultModel for f32 {
    #[inline]
    fn corrupt(self, bit_position: usize) -> TmrResult<Self> {
        flip_float_bit(self, bit_position)
    }
}

/// Doubles are narrowed to single precision before the flip, so the
/// result carries at most `f32` precision.
impl FaultModel for f64 {
    fn corrupt(self, bit_position: usize) -> TmrResult<Self> {
        flip_float_bit(self as f32, bit_position).map(f64::from)
    }
}
