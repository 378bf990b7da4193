use super::config;
use crate::error::ConfigError;
use profileguard_types::{ids, ExternalManagement, Profile, RuleConfig};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// The provider has no time-limit field: record the minutes as metadata and mark
/// the profile as externally managed so the gap stays visible.
pub fn apply(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let minutes = config::require_u32_in(cfg, ids::KEY_DAILY_MINUTES, 1..=MINUTES_PER_DAY)?;

    let mut next = profile.clone();
    next.externally_managed = ExternalManagement {
        managed: true,
        daily_limit_minutes: Some(minutes),
    };
    Ok(next)
}
