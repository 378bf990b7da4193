use crate::diff::diff;
use crate::mutations::mutate;
use profileguard_types::{
    ChangeDelta, EnforcementRun, Evaluation, FieldChange, Outcome, Profile, Rule,
};
use tracing::{debug, debug_span, info, warn};

/// Apply every enabled, provider-applicable rule to `profiles`.
///
/// Rules run in slice order against the current working profile, so later rules
/// see earlier rules' effects. A rule counts as applied when it changed at least
/// one profile and as skipped otherwise; inactive rules count as neither.
pub fn enforce(rules: &[Rule], profiles: &[Profile]) -> EnforcementRun {
    let span = debug_span!("enforce", rules = rules.len(), profiles = profiles.len());
    let _guard = span.enter();

    // Working set indexed by collection position; slots are replaced, never edited.
    let mut working: Vec<Profile> = profiles.to_vec();
    let mut changes: Vec<ChangeDelta> = Vec::new();
    let mut evaluations: Vec<Evaluation> = Vec::new();
    let mut applied = 0u32;
    let mut skipped = 0u32;

    for rule in rules.iter().filter(|r| r.is_active()) {
        let mut had_effect = false;

        for slot in working.iter_mut() {
            let outcome = match mutate(rule, slot) {
                Ok(candidate) => {
                    let field_changes = diff(slot, &candidate);
                    if field_changes.is_empty() {
                        Outcome::Unchanged
                    } else {
                        for change in field_changes {
                            changes.push(attribute(&rule.category, slot, change));
                        }
                        *slot = candidate;
                        Outcome::Applied
                    }
                }
                Err(err) => {
                    warn!(
                        category = %rule.category,
                        profile = %slot.id,
                        code = err.code(),
                        "rule not applied: {err}"
                    );
                    Outcome::Invalid {
                        code: err.code().to_string(),
                        message: err.to_string(),
                    }
                }
            };

            debug!(category = %rule.category, profile = %slot.id, ?outcome, "evaluated");
            had_effect |= outcome.is_applied();
            evaluations.push(Evaluation {
                category: rule.category.clone(),
                profile_id: slot.id.clone(),
                outcome,
            });
        }

        if had_effect {
            applied += 1;
        } else {
            skipped += 1;
        }
    }

    info!(applied, skipped, changes = changes.len(), "enforcement complete");

    EnforcementRun {
        profiles: working,
        changes,
        applied,
        skipped,
        evaluations,
    }
}

fn attribute(category: &str, profile: &Profile, change: FieldChange) -> ChangeDelta {
    ChangeDelta {
        profile_id: profile.id.clone(),
        profile_name: profile.name.clone(),
        category: category.to_string(),
        field: change.field,
        description: change.description,
        added: change.added,
        removed: change.removed,
    }
}
