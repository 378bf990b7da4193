use super::config;
use crate::error::ConfigError;
use profileguard_types::{ids, MaturityRating, Profile, RuleConfig};

/// Lower the rating to at most `maxRating`. Never raises it.
pub fn apply(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let raw = config::require_str(cfg, ids::KEY_MAX_RATING)?;
    let cap: MaturityRating = raw.parse().map_err(|_| ConfigError::UnknownRating {
        value: raw.to_string(),
    })?;

    let mut next = profile.clone();
    next.maturity_rating = profile.maturity_rating.min(cap);
    Ok(next)
}
