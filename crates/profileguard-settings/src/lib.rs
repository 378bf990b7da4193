//! Config parsing and preset/override resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ProfileguardConfigV1, RuleOverride, SCHEMA_CONFIG_V1};
pub use presets::{PRESET_NAMES, preset};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `profileguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ProfileguardConfigV1> {
    let cfg: ProfileguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the rule catalog used by the engine (preset + file overrides + CLI toggles).
pub fn resolve_config(
    cfg: ProfileguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
