use profileguard_types::RuleConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "profileguard.config.v1";

/// `profileguard.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfileguardConfigV1 {
    /// Optional schema string for tooling (`profileguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Starting catalog: `default`, `strict` or `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Map of rule category -> override.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleOverride {
    /// Override the preset's enabled state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Replace the preset's rule config. Keys are category-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RuleConfig>,
}
