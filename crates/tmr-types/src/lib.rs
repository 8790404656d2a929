// ─────────────────────────────────────────────────────────────────────
// Rad-Tolerant Kernel — TMR Types
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type tags, replica selectors, configuration, and error hierarchy for
//! the TMR kernel.

pub mod config;
pub mod error;
pub mod kind;
pub mod redundancy;

pub use config::{CampaignConfig, ValueMix};
pub use error::{TmrError, TmrResult};
pub use kind::ValueKind;
pub use redundancy::{RedundancyTier, Replica};
