use crate::{ChangeDelta, Profile};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for enforcement reports.
pub const SCHEMA_REPORT_V1: &str = "profileguard.report.v1";

/// Result of evaluating one rule against one profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The rule changed at least one field.
    Applied,
    /// The rule ran cleanly but the profile already satisfied it.
    Unchanged,
    /// The rule could not be applied; the profile was left as is.
    Invalid { code: String, message: String },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub category: String,
    pub profile_id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Output of one enforcement pass.
///
/// `applied + skipped` equals the number of enabled, provider-applicable rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnforcementRun {
    pub profiles: Vec<Profile>,
    pub changes: Vec<ChangeDelta>,
    pub applied: u32,
    pub skipped: u32,
    /// One entry per (rule, profile) pair, in evaluation order.
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Applied,
    Skipped,
    Disabled,
    NotApplicable,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSummary {
    pub category: String,
    pub label: String,
    pub status: RuleStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The JSON document written by `profileguard enforce`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnforcementReport {
    pub schema: String,
    pub tool: ToolMeta,
    /// Short content hash identifying this run.
    pub id: String,
    pub preset: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub rules: Vec<RuleSummary>,
    pub run: EnforcementRun,
}
