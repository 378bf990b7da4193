use profileguard_domain::RuleCatalog;
use profileguard_types::{RuleConfig, ids};
use serde_json::json;

pub const PRESET_NAMES: &[&str] = &["default", "strict", "off"];

/// Preset catalogs are opinionated starting points.
///
/// Keep these small and readable. Anything household-specific belongs in repo config.
pub fn preset(name: &str) -> RuleCatalog {
    match name {
        "strict" => strict_preset(),
        "off" => off_preset(),
        // default
        _ => RuleCatalog::new(),
    }
}

fn strict_preset() -> RuleCatalog {
    let mut catalog = RuleCatalog::new();
    let applicable: Vec<String> = catalog
        .list_rules()
        .iter()
        .filter(|r| r.applies_to_provider)
        .map(|r| r.category.clone())
        .collect();
    for category in &applicable {
        catalog.set_enabled(category, true);
    }

    catalog.update_config(
        ids::RULE_MATURITY_CEILING,
        RuleConfig::from([(ids::KEY_MAX_RATING.to_string(), json!("PG"))]),
    );
    catalog.update_config(
        ids::RULE_DAILY_LIMIT,
        RuleConfig::from([(ids::KEY_DAILY_MINUTES.to_string(), json!(60))]),
    );
    catalog
}

fn off_preset() -> RuleCatalog {
    let mut catalog = RuleCatalog::new();
    let categories: Vec<String> = catalog
        .list_rules()
        .iter()
        .map(|r| r.category.clone())
        .collect();
    for category in &categories {
        catalog.set_enabled(category, false);
    }
    catalog
}
