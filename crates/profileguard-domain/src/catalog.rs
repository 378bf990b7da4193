//! The rule catalog: an ordered, in-memory list of rules with stable defaults.
//!
//! Catalog order is application order. Operations naming an unknown category are
//! no-ops; they never fail.

use profileguard_types::{ids, Rule, RuleConfig};
use serde_json::json;
use tracing::debug;

/// Built-in rules in definition order, with their default state.
pub fn default_rules() -> Vec<Rule> {
    vec![
        rule(
            ids::RULE_MATURITY_CEILING,
            "Maturity ceiling",
            "Lower each profile's maturity rating to at most the configured cap.",
            true,
            true,
            json!({ "maxRating": "PG-13" }),
        ),
        rule(
            ids::RULE_TITLE_BLOCK,
            "Blocked titles",
            "Add the configured titles to each profile's blocked list.",
            false,
            true,
            json!({ "titles": [] }),
        ),
        rule(
            ids::RULE_DAILY_LIMIT,
            "Daily screen-time limit",
            "Record a daily viewing limit; the provider has no native setting for it.",
            false,
            true,
            json!({ "dailyMinutes": 120 }),
        ),
        rule(
            ids::RULE_PROFILE_LOCK,
            "Profile lock",
            "Require a PIN to open the profile.",
            false,
            true,
            json!({ "enabled": true }),
        ),
        rule(
            ids::RULE_AUTOPLAY_NEXT_EPISODE,
            "Autoplay next episode",
            "Control whether the next episode starts automatically.",
            false,
            true,
            json!({ "enabled": false }),
        ),
        rule(
            ids::RULE_AUTOPLAY_PREVIEWS,
            "Autoplay previews",
            "Control whether previews play while browsing.",
            false,
            true,
            json!({ "enabled": false }),
        ),
        rule(
            ids::RULE_PURCHASE_APPROVAL,
            "Purchase approval",
            "Require approval for in-app purchases.",
            false,
            false,
            json!({}),
        ),
    ]
}

fn rule(
    category: &str,
    label: &str,
    description: &str,
    enabled: bool,
    applies_to_provider: bool,
    config: serde_json::Value,
) -> Rule {
    let config: RuleConfig = match config {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => RuleConfig::new(),
    };
    Rule {
        category: category.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        enabled,
        applies_to_provider,
        config,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    pub fn list_rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, category: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.category == category)
    }

    pub fn toggle(&mut self, category: &str) -> &[Rule] {
        match self.find_mut(category) {
            Some(rule) => rule.enabled = !rule.enabled,
            None => debug!(category, "toggle ignored: unknown rule category"),
        }
        &self.rules
    }

    /// Set `enabled` explicitly; toggles only when the state differs.
    pub fn set_enabled(&mut self, category: &str, enabled: bool) -> &[Rule] {
        if self.get(category).is_some_and(|r| r.enabled != enabled) {
            return self.toggle(category);
        }
        &self.rules
    }

    /// Replace a rule's config wholesale. Callers merge beforehand if they need to.
    pub fn update_config(&mut self, category: &str, config: RuleConfig) -> &[Rule] {
        match self.find_mut(category) {
            Some(rule) => rule.config = config,
            None => debug!(category, "config update ignored: unknown rule category"),
        }
        &self.rules
    }

    /// Restore every rule to its built-in default.
    pub fn reset(&mut self) -> &[Rule] {
        self.rules = default_rules();
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    fn find_mut(&mut self, category: &str) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|r| r.category == category)
    }
}
