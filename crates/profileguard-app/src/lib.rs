//! Use case orchestration for profileguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is thin and delegates the enforcement itself to the domain crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod enforce;
mod explain;
mod history;
mod render;
mod report;

pub use enforce::{
    EnforceInput, EnforceOutput, load_config, parse_profiles_json, report_id, run_enforce,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use history::{AuditEntry, AuditLog, append_jsonl, read_jsonl};
pub use render::{render_markdown, render_rule_table};
pub use report::{parse_report_json, serialize_report};
