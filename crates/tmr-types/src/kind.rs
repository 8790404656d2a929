// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Scalar Kind Tags
// ─────────────────────────────────────────────────────────────────────
//! Type tag fixed at construction of a protected value.
//!
//! Statically typed protection carries the kind in its type parameter;
//! the tag is what dynamically typed holders compare on every write.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar kinds the kernel can protect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ValueKind {
    /// Rust type name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_type_name() {
        assert_eq!(ValueKind::I32.to_string(), "i32");
        assert_eq!(ValueKind::F32.to_string(), "f32");
        assert_eq!(ValueKind::U64.to_string(), "u64");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ValueKind::F32).unwrap();
        assert_eq!(json, "\"f32\"");
        let back: ValueKind = serde_json::from_str("\"u16\"").unwrap();
        assert_eq!(back, ValueKind::U16);
    }
}
