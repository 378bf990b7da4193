use profileguard_types::{ChangeDelta, EnforcementReport, Outcome, RuleStatus};

pub fn render_markdown(report: &EnforcementReport) -> String {
    let mut out = String::new();
    let run = &report.run;

    out.push_str("# Profileguard report\n\n");
    out.push_str(&format!(
        "- Preset: **{}**\n- Rules: {} applied / {} skipped\n- Changes: {} across {} profile(s)\n\n",
        report.preset,
        run.applied,
        run.skipped,
        run.changes.len(),
        run.profiles.len()
    ));

    if !report.rules.is_empty() {
        out.push_str("## Rules\n\n| Rule | Category | Status |\n|---|---|---|\n");
        for rule in &report.rules {
            out.push_str(&format!(
                "| {} | `{}` | {} |\n",
                rule.label,
                rule.category,
                status_label(rule.status)
            ));
        }
        out.push('\n');
    }

    let invalid: Vec<_> = run
        .evaluations
        .iter()
        .filter_map(|e| match &e.outcome {
            Outcome::Invalid { code, message } => Some((e, code, message)),
            _ => None,
        })
        .collect();
    if !invalid.is_empty() {
        out.push_str("## Invalid configuration\n\n");
        for (e, code, message) in invalid {
            out.push_str(&format!(
                "- `{}` on `{}`: {} (`{}`)\n",
                e.category, e.profile_id, message, code
            ));
        }
        out.push('\n');
    }

    if run.changes.is_empty() {
        out.push_str("No changes.\n");
        return out;
    }

    out.push_str("## Changes\n");
    for (profile_id, changes) in group_by_profile(&run.changes) {
        let name = &changes[0].profile_name;
        out.push_str(&format!("\n### {name} (`{profile_id}`)\n\n"));
        for c in changes {
            out.push_str(&format!(
                "- `{}`: {} ({})\n",
                c.field, c.description, c.category
            ));
            if !c.added.is_empty() {
                out.push_str(&format!("  - added: {}\n", c.added.join(", ")));
            }
            if !c.removed.is_empty() {
                out.push_str(&format!("  - removed: {}\n", c.removed.join(", ")));
            }
        }
    }

    out
}

fn status_label(status: RuleStatus) -> &'static str {
    match status {
        RuleStatus::Applied => "applied",
        RuleStatus::Skipped => "skipped",
        RuleStatus::Disabled => "disabled",
        RuleStatus::NotApplicable => "n/a",
    }
}

/// Changes grouped per profile, profiles in first-appearance order.
fn group_by_profile(changes: &[ChangeDelta]) -> Vec<(&str, Vec<&ChangeDelta>)> {
    let mut groups: Vec<(&str, Vec<&ChangeDelta>)> = Vec::new();
    for c in changes {
        match groups.iter_mut().find(|(id, _)| *id == c.profile_id) {
            Some((_, list)) => list.push(c),
            None => groups.push((c.profile_id.as_str(), vec![c])),
        }
    }
    groups
}
