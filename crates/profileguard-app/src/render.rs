//! Render use cases: markdown reports and rule tables from in-memory data.

use profileguard_types::{EnforcementReport, Rule};

pub fn render_markdown(report: &EnforcementReport) -> String {
    profileguard_render::render_markdown(report)
}

pub fn render_rule_table(rules: &[Rule]) -> String {
    profileguard_render::render_rule_table(rules)
}
