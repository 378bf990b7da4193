//! Append-only audit history of enforcement reports.

use anyhow::Context;
use camino::Utf8Path;
use profileguard_types::EnforcementReport;
use serde::{Deserialize, Serialize};
use std::io::Write;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// The recorded report's id.
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
    pub report: EnforcementReport,
}

/// In-memory audit log. Entries are only ever appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        report: EnforcementReport,
        recorded_at: OffsetDateTime,
    ) -> &AuditEntry {
        self.entries.push(AuditEntry {
            id: report.id.clone(),
            recorded_at,
            report,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append one entry as a JSON line, creating the file (and parent dirs) if needed.
pub fn append_jsonl(path: &Utf8Path, entry: &AuditEntry) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let mut line = serde_json::to_string(entry).context("serialize audit entry")?;
    line.push('\n');

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open history: {}", path))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("append history: {}", path))?;
    Ok(())
}

/// Read a JSON-lines history file. A missing file is an empty log; blank lines are skipped.
pub fn read_jsonl(path: &Utf8Path) -> anyhow::Result<AuditLog> {
    if !path.exists() {
        return Ok(AuditLog::new());
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read history: {}", path))?;

    let mut log = AuditLog::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: AuditEntry = serde_json::from_str(line)
            .with_context(|| format!("parse history line {} of {}", idx + 1, path))?;
        log.entries.push(entry);
    }
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnforceInput, run_enforce};
    use camino::Utf8PathBuf;
    use profileguard_settings::Overrides;
    use time::macros::datetime;

    fn report() -> EnforcementReport {
        run_enforce(EnforceInput {
            config_text: "",
            profiles_json: None,
            overrides: Overrides::default(),
        })
        .expect("enforce")
        .report
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = AuditLog::new();
        let first = report();
        let id = log.record(first.clone(), datetime!(2026-01-01 00:00:00 UTC)).id.clone();
        log.record(report(), datetime!(2026-01-01 00:05:00 UTC));

        assert_eq!(log.len(), 2);
        assert_eq!(id, first.id);
        assert_eq!(log.entries()[0].report, first);
        assert!(log.entries()[0].recorded_at < log.entries()[1].recorded_at);
    }

    #[test]
    fn jsonl_appends_and_reads_back() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("audit/history.jsonl"))
            .expect("utf8 path");

        let mut log = AuditLog::new();
        log.record(report(), datetime!(2026-01-01 00:00:00 UTC));
        log.record(report(), datetime!(2026-01-02 00:00:00 UTC));
        for entry in log.entries() {
            append_jsonl(&path, entry).expect("append");
        }

        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text.lines().count(), 2);
        assert_eq!(read_jsonl(&path).expect("read log"), log);
    }

    #[test]
    fn missing_history_is_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("none.jsonl")).expect("utf8 path");
        assert!(read_jsonl(&path).expect("read").is_empty());
    }

    #[test]
    fn corrupt_line_reports_its_number() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("bad.jsonl")).expect("utf8 path");
        std::fs::write(&path, "\n{not json}\n").expect("write");

        let err = read_jsonl(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse history line 2"));
    }
}
