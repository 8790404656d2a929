// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Deterministic RNG
// ─────────────────────────────────────────────────────────────────────

/// Minimal xorshift64 RNG for fault sampling (no external dep).
///
/// Deterministic for a given seed, so a campaign can be replayed.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed used when the caller passes zero (xorshift has no zero state).
    pub const FALLBACK_SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `lo..=hi`. Requires `lo <= hi`.
    pub fn range_u64(&mut self, lo: u64, hi: u64) -> u64 {
        let span = (hi - lo).wrapping_add(1);
        if span == 0 {
            return self.next_u64();
        }
        lo + self.next_u64() % span
    }

    /// Uniform in `lo..=hi`. Requires `lo <= hi`.
    pub fn range_i64(&mut self, lo: i64, hi: i64) -> i64 {
        let span = hi.wrapping_sub(lo) as u64;
        lo.wrapping_add(self.range_u64(0, span) as i64)
    }

    /// Uniform in `lo..=hi`. Requires `lo <= hi`.
    pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        self.range_u64(lo as u64, hi as u64) as usize
    }

    /// Uniform in `[lo, hi)`.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_uses_fallback() {
        let mut a = XorShift64::new(0);
        let mut b = XorShift64::new(XorShift64::FALLBACK_SEED);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_f64_unit_interval() {
        let mut rng = XorShift64::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_ranges_inclusive() {
        let mut rng = XorShift64::new(99);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let i = rng.range_usize(0, 2);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));

        for _ in 0..1000 {
            let v = rng.range_i64(-5, 5);
            assert!((-5..=5).contains(&v));
        }
        assert_eq!(rng.range_i64(3, 3), 3);
    }

    #[test]
    fn test_range_i64_full_span() {
        let mut rng = XorShift64::new(1);
        // Must not overflow.
        let _ = rng.range_i64(i64::MIN, i64::MAX);
        let _ = rng.range_u64(0, u64::MAX);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = XorShift64::new(5);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }
}
