// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Campaign Trial Records and Report
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use tmr_core::ScalarValue;
use tmr_types::{Replica, TmrError, TmrResult};

/// How a single trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialOutcome {
    /// No fault injected and the triple stayed consistent.
    Clean,
    /// No fault injected but the integrity check failed.
    FalseAlarm,
    /// Fault injected but it left the value unchanged.
    Masked,
    /// Fault detected and repaired to the original value.
    Corrected,
    /// Fault detected and "repaired" to a value other than the original.
    Miscorrected,
    /// Fault detected but no single-replica repair was possible.
    Uncorrectable,
    /// The voted value changed without the integrity check noticing.
    SilentCorruption,
}

impl TrialOutcome {
    /// Whether the protected value survived the trial intact.
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            TrialOutcome::Clean | TrialOutcome::Masked | TrialOutcome::Corrected
        )
    }
}

/// The bit flip applied during a trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InjectedFault {
    pub replica: Replica,
    pub bit_position: usize,
    pub corrupted: ScalarValue,
}

/// Full trace of one trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub index: usize,
    pub original: ScalarValue,
    pub fault: Option<InjectedFault>,
    /// Voted value after check/correct.
    pub recovered: ScalarValue,
    pub outcome: TrialOutcome,
}

/// Aggregate result of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignReport {
    pub total: usize,
    pub clean: usize,
    pub false_alarm: usize,
    pub masked: usize,
    pub corrected: usize,
    pub miscorrected: usize,
    pub uncorrectable: usize,
    pub silent_corruption: usize,
    pub records: Vec<TrialRecord>,
}

impl CampaignReport {
    pub fn from_records(records: Vec<TrialRecord>) -> Self {
        let mut report = CampaignReport {
            total: records.len(),
            ..Default::default()
        };
        for record in &records {
            let slot = match record.outcome {
                TrialOutcome::Clean => &mut report.clean,
                TrialOutcome::FalseAlarm => &mut report.false_alarm,
                TrialOutcome::Masked => &mut report.masked,
                TrialOutcome::Corrected => &mut report.corrected,
                TrialOutcome::Miscorrected => &mut report.miscorrected,
                TrialOutcome::Uncorrectable => &mut report.uncorrectable,
                TrialOutcome::SilentCorruption => &mut report.silent_corruption,
            };
            *slot += 1;
        }
        report.records = records;
        report
    }

    /// Trials in which a fault was injected.
    pub fn injected(&self) -> usize {
        self.records.iter().filter(|r| r.fault.is_some()).count()
    }

    /// Trials whose value did not survive.
    pub fn failures(&self) -> usize {
        self.total - (self.clean + self.masked + self.corrected)
    }

    /// Fraction of trials whose value survived, in [0, 1].
    /// An empty report has rate 0.
    pub fn protection_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.clean + self.masked + self.corrected) as f64 / self.total as f64
    }

    pub fn to_json(&self) -> TmrResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TmrError::Serialization(e.to_string()))
    }
}
