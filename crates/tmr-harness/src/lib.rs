// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — Fault-Injection Harness
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Seeded fault-injection campaigns that exercise the TMR kernel the
//! way a radiation test bench would: protect a value, flip one bit in
//! one replica, check, correct, and verify the original survived.

pub mod campaign;
pub mod report;
pub mod rng;

pub use campaign::Campaign;
pub use report::{CampaignReport, InjectedFault, TrialOutcome, TrialRecord};
pub use rng::XorShift64;
