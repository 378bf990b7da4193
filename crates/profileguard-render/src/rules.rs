use profileguard_types::{Rule, ids};

/// Render the rule toggles as a plain-text table grouped by category prefix.
///
/// Groups appear in the order their first rule appears; rules keep catalog order.
pub fn render_rule_table(rules: &[Rule]) -> String {
    let mut groups: Vec<(&str, Vec<&Rule>)> = Vec::new();
    for rule in rules {
        let group = ids::category_group(&rule.category);
        match groups.iter_mut().find(|(g, _)| *g == group) {
            Some((_, list)) => list.push(rule),
            None => groups.push((group, vec![rule])),
        }
    }

    let mut out = String::new();
    for (group, rules) in groups {
        out.push_str(group);
        out.push('\n');
        for rule in rules {
            let state = if !rule.applies_to_provider {
                "n/a"
            } else if rule.enabled {
                "on"
            } else {
                "off"
            };
            out.push_str(&format!(
                "  {:<4} {} ({})\n",
                state, rule.label, rule.category
            ));
        }
    }
    out
}
