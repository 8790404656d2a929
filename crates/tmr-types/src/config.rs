// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Fault-Injection Campaign Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{TmrError, TmrResult};
use crate::redundancy::RedundancyTier;

/// Which scalar kinds a campaign protects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMix {
    /// Even trials use integers, odd trials use floats.
    #[default]
    Alternate,
    IntegersOnly,
    FloatsOnly,
}

/// Runtime configuration for a seeded fault-injection campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Number of trials to run.
    /// Default: 10.
    pub trials: usize,

    /// Probability that a trial corrupts one replica.
    /// Default: 2/3.
    pub corruption_probability: f64,

    /// Inclusive range for sampled integer values.
    /// Default: (1, 1000).
    pub integer_range: (i64, i64),

    /// Half-open range for sampled float values.
    /// Default: (1.0, 1000.0).
    pub float_range: (f64, f64),

    /// Highest bit position a fault may target; positions are sampled
    /// uniformly in `0..=max_bit_position`.
    /// Default: 31.
    pub max_bit_position: u32,

    /// RNG seed. Zero is replaced by the generator's fallback seed.
    pub seed: u64,

    /// Redundancy tier used to build every protected value.
    pub tier: RedundancyTier,

    pub value_mix: ValueMix,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            corruption_probability: 2.0 / 3.0,
            integer_range: (1, 1000),
            float_range: (1.0, 1000.0),
            max_bit_position: 31,
            seed: 0x5EED_0F_7A1E,
            tier: RedundancyTier::Standard,
            value_mix: ValueMix::Alternate,
        }
    }
}

impl CampaignConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> TmrResult<()> {
        if self.trials < 1 {
            return Err(TmrError::Config(format!(
                "trials must be >= 1, got {}",
                self.trials
            )));
        }
        if !(0.0..=1.0).contains(&self.corruption_probability) {
            return Err(TmrError::Config(format!(
                "corruption_probability must be in [0, 1], got {}",
                self.corruption_probability
            )));
        }
        let (ilo, ihi) = self.integer_range;
        if ilo > ihi {
            return Err(TmrError::Config(format!(
                "integer_range must satisfy lo <= hi, got ({ilo}, {ihi})"
            )));
        }
        let (flo, fhi) = self.float_range;
        if !flo.is_finite() || !fhi.is_finite() || flo >= fhi {
            return Err(TmrError::Config(format!(
                "float_range must be finite with lo < hi, got ({flo}, {fhi})"
            )));
        }
        // Sampled floats are stored as f32.
        let f32_max = f64::from(f32::MAX);
        if flo < -f32_max || fhi > f32_max {
            return Err(TmrError::Config(format!(
                "float_range must lie within f32 range, got ({flo}, {fhi})"
            )));
        }
        if self.max_bit_position > 31 {
            return Err(TmrError::Config(format!(
                "max_bit_position must be <= 31, got {}",
                self.max_bit_position
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> TmrResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TmrError::Config(format!("JSON parse error: {e}")))
    }
}
