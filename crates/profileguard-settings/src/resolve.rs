use crate::{model::ProfileguardConfigV1, presets};
use anyhow::Context;
use profileguard_domain::RuleCatalog;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    /// Categories to flip after file overrides, in order. Unknown names are ignored.
    pub toggles: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub preset: String,
    pub catalog: RuleCatalog,
}

pub fn resolve_config(
    cfg: ProfileguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let preset = overrides
        .preset
        .clone()
        .or(cfg.preset.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut catalog = presets::preset(&preset);

    // per-rule overrides
    for (category, ov) in cfg.rules {
        validate_category(&catalog, &category)
            .with_context(|| format!("invalid entry [rules.\"{category}\"]"))?;

        if let Some(enabled) = ov.enabled {
            catalog.set_enabled(&category, enabled);
        }
        if let Some(config) = ov.config {
            catalog.update_config(&category, config);
        }
    }

    // CLI toggles
    for category in &overrides.toggles {
        debug!(category = %category, "applying toggle override");
        catalog.toggle(category);
    }

    Ok(ResolvedConfig { preset, catalog })
}

fn validate_category(catalog: &RuleCatalog, category: &str) -> anyhow::Result<()> {
    if catalog.get(category).is_none() {
        let known: Vec<&str> = catalog
            .list_rules()
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        anyhow::bail!(
            "unknown rule category: {category} (expected one of {})",
            known.join(", ")
        );
    }
    Ok(())
}
