use super::config;
use crate::error::ConfigError;
use profileguard_types::{ids, Profile, RuleConfig};

/// Union `titles` into the blocked list. Existing entries keep their position;
/// new ones follow in config order, each at most once.
pub fn apply(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let titles = config::require_titles(cfg, ids::KEY_TITLES)?;

    let mut blocked: Vec<String> = Vec::with_capacity(profile.blocked_titles.len() + titles.len());
    let existing = profile.blocked_titles.iter().map(String::as_str);
    for title in existing.chain(titles) {
        if !blocked.iter().any(|b| b == title) {
            blocked.push(title.to_string());
        }
    }

    let mut next = profile.clone();
    next.blocked_titles = blocked;
    Ok(next)
}
