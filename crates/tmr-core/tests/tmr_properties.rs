use proptest::prelude::*;
use tmr_core::{
    binary_digits, flip_float_bit, flip_integer_bit, ProtectedScalar, Replica, ScalarValue,
    TmrError, TripleRedundantValue, VoteOutcome,
};

fn replica() -> impl Strategy<Value = Replica> {
    prop_oneof![Just(Replica::A), Just(Replica::B), Just(Replica::C)]
}

proptest! {
    #[test]
    fn write_restores_integrity(initial in any::<i64>(), a in any::<i64>(), b in any::<i64>(), v in any::<i64>()) {
        let mut tmr = TripleRedundantValue::new(initial);
        tmr.inject(Replica::A, a);
        tmr.inject(Replica::B, b);
        tmr.write(v);
        prop_assert!(tmr.check_integrity());
        prop_assert_eq!(tmr.read(), v);
    }

    #[test]
    fn single_corruption_is_masked(v in any::<u32>(), bad in any::<u32>(), which in replica()) {
        prop_assume!(v != bad);
        let mut tmr = TripleRedundantValue::new(v);
        tmr.inject(which, bad);
        prop_assert_eq!(tmr.read(), v);
        prop_assert!(!tmr.check_integrity());
        prop_assert_eq!(tmr.vote(), VoteOutcome::Majority { outlier: which });
    }

    #[test]
    fn single_corruption_is_corrected(v in any::<i32>(), bad in any::<i32>(), which in replica()) {
        prop_assume!(v != bad);
        let mut tmr = TripleRedundantValue::new(v);
        tmr.inject(which, bad);
        prop_assert!(tmr.correct());
        prop_assert!(tmr.check_integrity());
        prop_assert_eq!(tmr.read(), v);
        prop_assert_eq!(tmr.replicas(), [v, v, v]);
    }

    #[test]
    fn correct_on_consistent_is_noop(v in any::<i16>()) {
        let mut tmr = TripleRedundantValue::new(v);
        prop_assert!(!tmr.correct());
        prop_assert_eq!(tmr.replicas(), [v, v, v]);
    }

    #[test]
    fn pairwise_distinct_is_uncorrectable(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        prop_assume!(a != b && a != c && b != c);
        let mut tmr = TripleRedundantValue::new(a);
        tmr.inject(Replica::B, b);
        tmr.inject(Replica::C, c);
        prop_assert!(!tmr.check_integrity());
        prop_assert!(!tmr.correct());
        prop_assert_eq!(tmr.replicas(), [a, b, c]);
        prop_assert_eq!(tmr.read(), a);
    }

    #[test]
    fn integer_flip_roundtrip_32bit(v in any::<u32>(), p in 0usize..32) {
        let flipped = flip_integer_bit(v, p);
        prop_assert_ne!(flipped, v);
        prop_assert_eq!(flip_integer_bit(flipped, p), v);
    }

    #[test]
    fn integer_flip_roundtrip_signed(v in any::<i32>(), p in 0usize..32) {
        prop_assert_eq!(flip_integer_bit(flip_integer_bit(v, p), p), v);
    }

    #[test]
    fn integer_flip_roundtrip_wide(v in (1u64 << 32)..u64::MAX, offset in 1usize..32) {
        // Skip the leading digit: flipping it shortens the string.
        let width = binary_digits(v).len();
        let p = (width - 1).min(offset);
        prop_assert_eq!(flip_integer_bit(flip_integer_bit(v, p), p), v);
    }

    #[test]
    fn integer_flip_out_of_range_is_noop(v in any::<u32>(), p in 32usize..10_000) {
        prop_assert_eq!(flip_integer_bit(v, p), v);
    }

    #[test]
    fn integer_flip_matches_digit_string(v in any::<u32>(), p in 0usize..32) {
        let mut digits: Vec<char> = binary_digits(v).chars().collect();
        digits[p] = if digits[p] == '0' { '1' } else { '0' };
        let expected = u32::from_str_radix(&digits.iter().collect::<String>(), 2).unwrap();
        prop_assert_eq!(flip_integer_bit(v, p), expected);
    }

    #[test]
    fn float_flip_roundtrip(bits in any::<u32>(), p in 0usize..32) {
        let v = f32::from_bits(bits);
        let back = flip_float_bit(flip_float_bit(v, p).unwrap(), p).unwrap();
        prop_assert_eq!(back.to_bits(), v.to_bits());
    }

    #[test]
    fn float_flip_is_lsb_indexed(v in -1.0e6f32..1.0e6, p in 0usize..32) {
        let flipped = flip_float_bit(v, p).unwrap();
        prop_assert_eq!(flipped.to_bits() ^ v.to_bits(), 1u32 << p);
    }

    #[test]
    fn float_flip_out_of_range_rejected(v in any::<f32>(), p in 32usize..1000) {
        let rejected = matches!(
            flip_float_bit(v, p),
            Err(TmrError::InvalidBitPosition { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn float_single_fault_restores_bit_pattern(v in -1.0e6f32..1.0e6, p in 0usize..32, which in replica()) {
        let mut tmr = TripleRedundantValue::new(v);
        let corrupted = flip_float_bit(v, p).unwrap();
        tmr.inject(which, corrupted);
        prop_assert!(!tmr.check_integrity());
        prop_assert_eq!(tmr.read().to_bits(), v.to_bits());
        prop_assert!(tmr.correct());
        prop_assert_eq!(tmr.replica(which).to_bits(), v.to_bits());
    }

    #[test]
    fn float_write_restores_integrity_for_any_pattern(initial in any::<f32>(), bits in any::<u32>()) {
        let mut tmr = TripleRedundantValue::new(initial);
        tmr.inject(Replica::A, f32::NAN);
        tmr.write(f32::from_bits(bits));
        prop_assert!(tmr.check_integrity());
        prop_assert!(!tmr.correct());
    }

    #[test]
    fn dynamic_write_rejects_other_kind(v in any::<i32>(), f in any::<f32>()) {
        let mut p = ProtectedScalar::new(ScalarValue::I32(v));
        let mismatch = matches!(
            p.write(ScalarValue::F32(f)),
            Err(TmrError::TypeMismatch { .. })
        );
        prop_assert!(mismatch);
        prop_assert_eq!(p.read(), ScalarValue::I32(v));
        prop_assert!(p.check_integrity());
    }
}
