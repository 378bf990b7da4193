//! Stable DTOs and IDs used across the profileguard workspace.
//!
//! This crate is intentionally boring:
//! - profile, rule, and change data types
//! - the emitted report envelope
//! - stable rule category IDs and reason codes
//! - explain registry for rule guidance

#![forbid(unsafe_code)]

pub mod change;
pub mod explain;
pub mod ids;
pub mod profile;
pub mod report;
pub mod rule;

pub use change::{ChangeDelta, FieldChange, ProfileField};
pub use explain::{lookup_explanation, Explanation};
pub use profile::{
    ExternalManagement, MaturityRating, Profile, ProfileKind, ProfileLock, UnknownRating,
    ViewingEntry,
};
pub use report::{
    EnforcementReport, EnforcementRun, Evaluation, Outcome, RuleStatus, RuleSummary, ToolMeta,
    SCHEMA_REPORT_V1,
};
pub use rule::{Rule, RuleConfig};
