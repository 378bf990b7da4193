//! Developer tasks (schema emission, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use profileguard_app::{EnforceInput, run_enforce};
use profileguard_settings::Overrides;
use profileguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root: `CARGO_MANIFEST_DIR` of the xtask crate, one level up.
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(profileguard_types::EnforcementReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(profileguard_settings::ProfileguardConfigV1)
}

fn generate_profiles_schema() -> schemars::Schema {
    schema_for!(Vec<profileguard_types::Profile>)
}

const SCHEMAS: &[SchemaSpec] = &[
    SchemaSpec {
        filename: "profileguard.report.v1.json",
        generate: generate_report_schema,
    },
    SchemaSpec {
        filename: "profileguard.config.v1.json",
        generate: generate_config_schema,
    },
    SchemaSpec {
        filename: "profileguard.profiles.v1.json",
        generate: generate_profiles_schema,
    },
];

/// Write every schema as pretty JSON into `out_dir` (created if missing).
fn emit_schemas(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;

    for spec in SCHEMAS {
        let mut json = serde_json::to_string_pretty(&(spec.generate)())
            .with_context(|| format!("serialize {}", spec.filename))?;
        json.push('\n');
        let path = out_dir.join(spec.filename);
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                Show this message");
    eprintln!("  emit-schemas [DIR]  Write report, config and profile JSON schemas (default: schemas/)");
    eprintln!("  print-schema-ids    Print known schema IDs");
    eprintln!("  conform             Enforce every tests/fixtures case and validate the reports");
    eprintln!("  explain-coverage    Validate all rule categories have explanations");
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Run every fixture through the enforce use case.
///
/// Each fixture directory may hold `profileguard.toml`, `profiles.json`, and an
/// `expected.report.json` golden compared after normalization.
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(generate_report_schema())?;
    let profiles_schema = compile(generate_profiles_schema())?;

    let dir = fixtures_dir();
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for fixture_dir in &entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let config_text = read_optional(&fixture_dir.join("profileguard.toml"))?.unwrap_or_default();
        let profiles_text = read_optional(&fixture_dir.join("profiles.json"))?;

        if let Some(text) = &profiles_text {
            let value: serde_json::Value = serde_json::from_str(text)
                .with_context(|| format!("Failed to parse profiles for fixture '{}'", name))?;
            for err in profiles_schema.iter_errors(&value) {
                errors.push(format!("fixture '{}': profiles schema: {}", name, err));
            }
        }

        let output = match run_enforce(EnforceInput {
            config_text: &config_text,
            profiles_json: profiles_text.as_deref(),
            overrides: Overrides::default(),
        }) {
            Ok(output) => output,
            Err(err) => {
                errors.push(format!("fixture '{}': enforce failed: {:#}", name, err));
                continue;
            }
        };

        let report = serde_json::to_value(&output.report).context("Failed to serialize report")?;
        for err in report_schema.iter_errors(&report) {
            errors.push(format!("fixture '{}': report schema: {}", name, err));
        }

        match read_optional(&fixture_dir.join("expected.report.json"))? {
            Some(golden_text) => {
                let golden: serde_json::Value = serde_json::from_str(&golden_text)
                    .with_context(|| format!("Failed to parse golden for fixture '{}'", name))?;
                if normalize_nondeterministic(report) != normalize_nondeterministic(golden) {
                    errors.push(format!(
                        "fixture '{}': output differs from expected.report.json",
                        name
                    ));
                } else {
                    println!("  ✓ fixture '{}' matches golden report", name);
                }
            }
            None => println!("  ✓ fixture '{}' produces a valid report (no golden file)", name),
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ {} fixtures conform", entries.len());
    Ok(())
}

/// Validate that all rule categories have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let categories = profileguard_types::explain::all_categories();
    let mut errors = Vec::new();

    for category in categories {
        match profileguard_types::explain::lookup_explanation(category) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Category '{}' has empty title", category));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Category '{}' has empty description", category));
                }
                if exp.configuration.is_empty() {
                    errors.push(format!("Category '{}' has empty configuration", category));
                }
                if profileguard_settings::parse_config_toml(exp.example).is_err() {
                    errors.push(format!("Category '{}' example is not valid config", category));
                }
            }
            None => errors.push(format!("Category '{}' has no explanation", category)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} categories have explanations", categories.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => {
            let out_dir = args
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| project_root().join("schemas"));
            emit_schemas(&out_dir)
        }
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in SCHEMAS {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
