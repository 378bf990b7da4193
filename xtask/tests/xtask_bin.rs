use std::process::Command;

#[test]
fn xtask_help_runs() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("help")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn explain_coverage_passes() {
    let output = Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg("explain-coverage")
        .output()
        .expect("run xtask");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn conform_passes_on_checked_in_fixtures() {
    let output = Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg("conform")
        .env("CARGO_MANIFEST_DIR", env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("run xtask");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg("frobnicate")
        .output()
        .expect("run xtask");

    assert!(!output.status.success());
}

#[test]
fn emit_schemas_writes_every_schema() {
    let out = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg("emit-schemas")
        .arg(out.path())
        .output()
        .expect("run xtask");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for name in [
        "profileguard.report.v1.json",
        "profileguard.config.v1.json",
        "profileguard.profiles.v1.json",
    ] {
        let text = std::fs::read_to_string(out.path().join(name)).expect("schema file");
        let schema: serde_json::Value = serde_json::from_str(&text).expect("schema json");
        assert!(schema.is_object(), "{name} is not a JSON object");
    }
}

#[test]
fn validate_schemas_is_not_a_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg("validate-schemas")
        .output()
        .expect("run xtask");

    assert!(!output.status.success());
}
