//! The `enforce` use case: resolve config, run the engine, and build a report.

use anyhow::Context;
use profileguard_settings::{Overrides, ProfileguardConfigV1, ResolvedConfig};
use profileguard_types::{
    EnforcementReport, EnforcementRun, Profile, SCHEMA_REPORT_V1, ToolMeta,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

/// Input for the enforce use case.
#[derive(Clone, Debug)]
pub struct EnforceInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Profiles as a JSON array; `None` uses the seed household.
    pub profiles_json: Option<&'a str>,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the enforce use case.
#[derive(Clone, Debug)]
pub struct EnforceOutput {
    /// The generated report.
    pub report: EnforcementReport,
    /// The resolved configuration used.
    pub resolved: ResolvedConfig,
}

/// Parse and resolve config text. Empty text means the default preset.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        ProfileguardConfigV1::default()
    } else {
        profileguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    profileguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Parse a JSON array of profiles. Profile ids must be unique.
pub fn parse_profiles_json(text: &str) -> anyhow::Result<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_json::from_str(text).context("parse profiles json")?;
    let mut seen = BTreeSet::new();
    for p in &profiles {
        if !seen.insert(p.id.as_str()) {
            anyhow::bail!("duplicate profile id: {}", p.id);
        }
    }
    Ok(profiles)
}

/// Run the enforce use case: resolve config, enforce the catalog, produce a report.
pub fn run_enforce(input: EnforceInput<'_>) -> anyhow::Result<EnforceOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides)?;
    let profiles = match input.profiles_json {
        Some(text) => parse_profiles_json(text)?,
        None => profileguard_domain::seed_profiles(),
    };

    let rules = resolved.catalog.list_rules();
    let run = profileguard_domain::enforce(rules, &profiles);
    let summaries = profileguard_domain::rule_summaries(rules, &run);

    let finished_at = OffsetDateTime::now_utc();
    let id = report_id(&run, started_at)?;
    info!(
        id = %id,
        preset = %resolved.preset,
        applied = run.applied,
        skipped = run.skipped,
        "enforce finished"
    );

    let report = EnforcementReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "profileguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        id,
        preset: resolved.preset.clone(),
        started_at,
        finished_at,
        rules: summaries,
        run,
    };

    Ok(EnforceOutput { report, resolved })
}

/// First 16 hex chars of SHA-256 over the run's canonical JSON plus the start timestamp.
pub fn report_id(run: &EnforcementRun, started_at: OffsetDateTime) -> anyhow::Result<String> {
    let canonical = serde_json::to_vec(run).context("serialize run")?;
    let stamp = started_at.format(&Rfc3339).context("format start time")?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    hasher.update(stamp.as_bytes());
    let digest = hasher.finalize();

    let mut id = hex::encode(digest);
    id.truncate(16);
    Ok(id)
}
