use profileguard_types::{
    ExternalManagement, MaturityRating, Profile, ProfileKind, ProfileLock, Rule, RuleConfig,
};
use serde_json::Value;

pub fn profile(id: &str, rating: MaturityRating) -> Profile {
    let mut name = id.to_string();
    if let Some(first) = name.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    Profile {
        id: id.to_string(),
        name,
        kind: ProfileKind::Kids,
        maturity_rating: rating,
        blocked_titles: Vec::new(),
        profile_lock: ProfileLock::default(),
        autoplay_next_episode: true,
        autoplay_previews: true,
        viewing_history: Vec::new(),
        externally_managed: ExternalManagement::default(),
    }
}

pub fn config(value: Value) -> RuleConfig {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => RuleConfig::new(),
    }
}

/// An enabled, provider-applicable rule.
pub fn rule(category: &str, value: Value) -> Rule {
    Rule {
        category: category.to_string(),
        label: category.to_string(),
        description: String::new(),
        enabled: true,
        applies_to_provider: true,
        config: config(value),
    }
}

pub fn disabled(mut rule: Rule) -> Rule {
    rule.enabled = false;
    rule
}

pub fn not_applicable(mut rule: Rule) -> Rule {
    rule.applies_to_provider = false;
    rule
}
