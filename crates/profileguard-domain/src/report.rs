use profileguard_types::{EnforcementRun, Rule, RuleStatus, RuleSummary};

/// Classify every rule in `rules` against a finished run, in catalog order.
///
/// `rules` must be the slice the run was produced from. Each active rule owns
/// the next `run.profiles.len()` evaluations; it is applied when any of them is.
pub fn rule_summaries(rules: &[Rule], run: &EnforcementRun) -> Vec<RuleSummary> {
    let mut blocks = run.evaluations.chunks(run.profiles.len().max(1));

    rules
        .iter()
        .map(|rule| {
            let status = if !rule.applies_to_provider {
                RuleStatus::NotApplicable
            } else if !rule.enabled {
                RuleStatus::Disabled
            } else {
                let evaluations = blocks.next().unwrap_or_default();
                if evaluations.iter().any(|e| e.outcome.is_applied()) {
                    RuleStatus::Applied
                } else {
                    RuleStatus::Skipped
                }
            };
            RuleSummary {
                category: rule.category.clone(),
                label: rule.label.clone(),
                status,
            }
        })
        .collect()
}
