//! Fuzz target for rule mutations with structured, possibly malformed config.
//!
//! Goal: every mutation either returns a profile or a config error; it never
//! panics and never touches viewing history.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_config
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use profileguard_domain::{mutate, seed_profiles};
use profileguard_types::{Rule, RuleConfig, explain::all_categories};
use serde_json::Value;

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Titles(Vec<String>),
}

impl FuzzValue {
    fn into_json(self) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(n) => Value::from(n),
            FuzzValue::Float(f) => Value::from(f),
            FuzzValue::Text(s) => Value::String(s),
            FuzzValue::Titles(t) => Value::from(t),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    category: u8,
    entries: Vec<(u8, FuzzValue)>,
}

const KEYS: &[&str] = &["maxRating", "titles", "dailyMinutes", "enabled", "pin", "other"];

fuzz_target!(|input: FuzzInput| {
    let categories = all_categories();
    let category = categories[input.category as usize % categories.len()];

    let config: RuleConfig = input
        .entries
        .into_iter()
        .map(|(k, v)| (KEYS[k as usize % KEYS.len()].to_string(), v.into_json()))
        .collect();

    let rule = Rule {
        category: category.to_string(),
        label: category.to_string(),
        description: String::new(),
        enabled: true,
        applies_to_provider: true,
        config,
    };

    for profile in seed_profiles() {
        if let Ok(next) = mutate(&rule, &profile) {
            assert_eq!(next.id, profile.id);
            assert_eq!(next.viewing_history, profile.viewing_history);
        }
    }
});
