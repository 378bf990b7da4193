//! Conformance tests for profileguard.
//!
//! These tests validate:
//! 1. Every catalog category has an explanation
//! 2. Emitted reports validate against the generated report schema
//! 3. Report ids, reason codes, and rule categories use the stable vocabularies

use assert_cmd::Command;
use profileguard_types::{EnforcementReport, explain, ids};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn run_enforce(dir: &Path, extra: &[&str]) -> Value {
    Command::cargo_bin("profileguard")
        .unwrap()
        .current_dir(dir)
        .arg("enforce")
        .args(extra)
        .assert()
        .success();
    let text = std::fs::read_to_string(dir.join("artifacts/profileguard/report.json"))
        .expect("report written");
    serde_json::from_str(&text).expect("report is JSON")
}

fn report_validator() -> jsonschema::Validator {
    let schema = serde_json::to_value(schemars::schema_for!(EnforcementReport))
        .expect("serialize schema");
    jsonschema::validator_for(&schema).expect("schema compiles")
}

fn assert_valid(validator: &jsonschema::Validator, report: &Value) {
    let errors: Vec<String> = validator
        .iter_errors(report)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "report violates schema: {errors:#?}");
}

// =============================================================================
// Explanation Coverage Tests
// =============================================================================

#[test]
fn all_categories_have_explanations() {
    for category in explain::all_categories() {
        let exp = explain::lookup_explanation(category)
            .unwrap_or_else(|| panic!("Category '{}' has no explanation", category));
        assert!(!exp.title.is_empty(), "Category '{}' has empty title", category);
        assert!(
            !exp.description.is_empty(),
            "Category '{}' has empty description",
            category
        );
        assert!(
            !exp.configuration.is_empty(),
            "Category '{}' has empty configuration",
            category
        );
        assert!(
            exp.example.contains(category),
            "Category '{}' example does not mention the category",
            category
        );
    }
}

#[test]
fn categories_use_group_dot_name_form() {
    for category in explain::all_categories() {
        let (group, name) = category
            .split_once('.')
            .unwrap_or_else(|| panic!("'{}' has no group prefix", category));
        assert_eq!(ids::category_group(category), group);
        assert!(
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
            "'{}' has a malformed name",
            category
        );
    }
}

// =============================================================================
// Report Schema Conformance
// =============================================================================

#[test]
fn default_report_validates_against_schema() {
    let tmp = TempDir::new().expect("tempdir");
    let report = run_enforce(tmp.path(), &[]);
    assert_valid(&report_validator(), &report);
}

#[test]
fn report_with_invalid_evaluations_validates_against_schema() {
    let tmp = TempDir::new().expect("tempdir");
    std::fs::write(
        tmp.path().join("profileguard.toml"),
        r#"
preset = "strict"

[rules."screen_time.daily_limit"]
config = { dailyMinutes = 5000 }
"#,
    )
    .expect("config");

    let report = run_enforce(tmp.path(), &[]);
    assert_valid(&report_validator(), &report);

    let codes: Vec<&str> = report["run"]["evaluations"]
        .as_array()
        .expect("evaluations")
        .iter()
        .filter(|e| e["outcome"] == "invalid")
        .filter_map(|e| e["code"].as_str())
        .collect();
    assert!(codes.contains(&ids::REASON_OUT_OF_RANGE), "codes: {codes:?}");
    // Seed profiles without a PIN cannot be locked by the strict preset.
    assert!(codes.contains(&ids::REASON_LOCK_WITHOUT_PIN), "codes: {codes:?}");
}

#[test]
fn report_identity_fields_are_well_formed() {
    let tmp = TempDir::new().expect("tempdir");
    let report = run_enforce(tmp.path(), &[]);

    let id = report["id"].as_str().expect("id");
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(report["tool"]["name"], "profileguard");

    for rule in report["rules"].as_array().expect("rules") {
        let category = rule["category"].as_str().expect("category");
        assert!(
            explain::all_categories().contains(&category),
            "unknown category '{}' in report",
            category
        );
    }
}
