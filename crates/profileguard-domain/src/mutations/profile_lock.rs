use super::config;
use crate::error::ConfigError;
use profileguard_types::{ids, Profile, ProfileLock, RuleConfig};

/// Turn the PIN lock on or off.
///
/// Enabling takes `pin` from config, falling back to the PIN already stored on the
/// profile. A lock with no PIN is not a valid state, so enabling without either is
/// refused. Disabling keeps the stored PIN.
pub fn apply(cfg: &RuleConfig, profile: &Profile) -> Result<Profile, ConfigError> {
    let enable = config::require_bool(cfg, ids::KEY_ENABLED)?;
    let configured = config::optional_str(cfg, ids::KEY_PIN)?;
    if let Some(pin) = configured {
        validate_pin(pin)?;
    }

    let mut next = profile.clone();
    if enable {
        let pin = configured
            .or_else(|| profile.profile_lock.stored_pin())
            .ok_or(ConfigError::LockWithoutPin)?;
        next.profile_lock = ProfileLock {
            enabled: true,
            pin: Some(pin.to_string()),
        };
    } else {
        next.profile_lock.enabled = false;
    }
    Ok(next)
}

fn validate_pin(pin: &str) -> Result<(), ConfigError> {
    if pin.len() == 4 && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConfigError::MalformedPin)
    }
}
