use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Category-specific rule settings. Shapes are checked only by the consuming mutation.
pub type RuleConfig = BTreeMap<String, JsonValue>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub category: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
    /// `false` when the current provider has no mapping for this category.
    pub applies_to_provider: bool,
    #[serde(default)]
    pub config: RuleConfig,
}

impl Rule {
    /// Whether the engine dispatches this rule at all.
    pub fn is_active(&self) -> bool {
        self.enabled && self.applies_to_provider
    }
}
