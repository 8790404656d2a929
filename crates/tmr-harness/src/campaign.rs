// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Fault-Injection Campaign
// ─────────────────────────────────────────────────────────────────────
//! Drives the protect → corrupt → check → correct → verify lifecycle
//! over a seeded series of trials.
//!
//! Every trial builds a fresh protected value, so no state leaks from
//! one trial into the next.

use tmr_core::{make_protected_scalar, ProtectedScalar, ScalarValue};
use tmr_types::{CampaignConfig, Replica, TmrResult, ValueMix};

use crate::report::{CampaignReport, InjectedFault, TrialOutcome, TrialRecord};
use crate::rng::XorShift64;

/// Seeded fault-injection campaign.
pub struct Campaign {
    config: CampaignConfig,
    rng: XorShift64,
}

impl Campaign {
    /// Validates `config` and seeds the RNG from it.
    pub fn new(config: CampaignConfig) -> TmrResult<Self> {
        config.validate()?;
        let rng = XorShift64::new(config.seed);
        Ok(Self { config, rng })
    }

    /// Run every configured trial and aggregate the results.
    pub fn run(&mut self) -> TmrResult<CampaignReport> {
        let mut records = Vec::with_capacity(self.config.trials);
        for index in 0..self.config.trials {
            records.push(self.run_trial(index)?);
        }
        let report = CampaignReport::from_records(records);

        log::info!(
            "tmr campaign ({} tier): {} trials, {} injected, {} corrected, {} failed, protection rate {:.1}%",
            self.config.tier,
            report.total,
            report.injected(),
            report.corrected,
            report.failures(),
            report.protection_rate() * 100.0
        );
        Ok(report)
    }

    /// Run a single trial. `index` selects the value kind under
    /// `ValueMix::Alternate`.
    pub fn run_trial(&mut self, index: usize) -> TmrResult<TrialRecord> {
        let original = self.sample_value(index);
        let mut protected = make_protected_scalar(self.config.tier, original);

        let fault = if self.rng.chance(self.config.corruption_probability) {
            Some(self.inject(&mut protected)?)
        } else {
            None
        };

        let outcome = classify(&mut protected, original, fault.is_some());
        match outcome {
            TrialOutcome::Clean | TrialOutcome::Masked | TrialOutcome::Corrected => {
                log::debug!("trial {index}: {original} -> {outcome:?}");
            }
            _ => log::warn!("trial {index}: {original} -> {outcome:?} ({protected})"),
        }

        Ok(TrialRecord {
            index,
            original,
            fault,
            recovered: protected.read(),
            outcome,
        })
    }

    fn sample_value(&mut self, index: usize) -> ScalarValue {
        let integer = match self.config.value_mix {
            ValueMix::Alternate => index % 2 == 0,
            ValueMix::IntegersOnly => true,
            ValueMix::FloatsOnly => false,
        };
        if integer {
            let (lo, hi) = self.config.integer_range;
            ScalarValue::I64(self.rng.range_i64(lo, hi))
        } else {
            let (lo, hi) = self.config.float_range;
            let v = self.rng.range_f64(lo, hi);
            // Two decimals, like a logged sensor reading.
            ScalarValue::F32(((v * 100.0).round() / 100.0) as f32)
        }
    }

    fn inject(&mut self, protected: &mut ProtectedScalar) -> TmrResult<InjectedFault> {
        let replica = Replica::ALL[self.rng.range_usize(0, Replica::ALL.len() - 1)];
        let bit_position = self
            .rng
            .range_usize(0, self.config.max_bit_position as usize);
        let corrupted = protected.inject_bit_flip(replica, bit_position)?;
        Ok(InjectedFault {
            replica,
            bit_position,
            corrupted,
        })
    }
}

/// Check, correct if needed, and compare against the original value.
fn classify(
    protected: &mut ProtectedScalar,
    original: ScalarValue,
    faulted: bool,
) -> TrialOutcome {
    if !faulted {
        return if protected.check_integrity() {
            TrialOutcome::Clean
        } else {
            TrialOutcome::FalseAlarm
        };
    }

    if protected.check_integrity() {
        return if protected.read().same(&original) {
            TrialOutcome::Masked
        } else {
            TrialOutcome::SilentCorruption
        };
    }

    if !protected.correct() {
        return TrialOutcome::Uncorrectable;
    }
    if protected.read().same(&original) {
        TrialOutcome::Corrected
    } else {
        TrialOutcome::Miscorrected
    }
}
