use super::config;
use crate::error::ConfigError;
use profileguard_types::{ids, Profile, RuleConfig};

pub fn apply_next_episode(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let enabled = config::require_bool(cfg, ids::KEY_ENABLED)?;
    let mut next = profile.clone();
    next.autoplay_next_episode = enabled;
    Ok(next)
}

pub fn apply_previews(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let enabled = config::require_bool(cfg, ids::KEY_ENABLED)?;
    let mut next = profile.clone();
    next.autoplay_previews = enabled;
    Ok(next)
}
