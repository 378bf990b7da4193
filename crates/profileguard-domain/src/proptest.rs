//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Diff idempotence
//! - Applied/skipped partitioning (engine counts and rule summaries agree)
//! - Determinism of enforcement output
//! - Per-rule policy (maturity never raised, blocked set deduplicated)

use crate::diff::diff;
use crate::engine::enforce;
use crate::report::rule_summaries;
use crate::test_support::config;
use profileguard_types::{
    ids, ExternalManagement, MaturityRating, Profile, ProfileKind, ProfileLock, Rule,
    RuleStatus, ViewingEntry,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_rating() -> impl Strategy<Value = MaturityRating> {
    prop::sample::select(MaturityRating::ALL.to_vec())
}

fn arb_kind() -> impl Strategy<Value = ProfileKind> {
    prop_oneof![
        Just(ProfileKind::Kids),
        Just(ProfileKind::Standard),
        Just(ProfileKind::Adult),
    ]
}

/// Titles from a small pool so overlaps between profiles and rules are common.
fn arb_title() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Squid Game",
        "Wednesday",
        "Bluey",
        "Stranger Things",
        "The Crown",
        "Dark",
    ])
    .prop_map(|s| s.to_string())
}

fn arb_pin() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::string::string_regex("[0-9]{4}")
            .unwrap()
            .prop_map(Some),
    ]
}

fn arb_profile(id: String) -> impl Strategy<Value = Profile> {
    (
        arb_kind(),
        arb_rating(),
        prop::collection::btree_set(arb_title(), 0..4),
        any::<bool>(),
        arb_pin(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(1u32..=1440),
    )
        .prop_map(
            move |(kind, rating, blocked, locked, pin, next_ep, previews, minutes)| Profile {
                id: id.clone(),
                name: id.to_uppercase(),
                kind,
                maturity_rating: rating,
                blocked_titles: blocked.into_iter().collect(),
                profile_lock: ProfileLock {
                    enabled: locked && pin.is_some(),
                    pin,
                },
                autoplay_next_episode: next_ep,
                autoplay_previews: previews,
                viewing_history: vec![ViewingEntry {
                    title: "Bluey".to_string(),
                    rating: MaturityRating::G,
                    minutes: 7,
                }],
                externally_managed: ExternalManagement {
                    managed: minutes.is_some(),
                    daily_limit_minutes: minutes,
                },
            },
        )
}

/// Profiles with unique ids `p0`, `p1`, ...
fn arb_profiles() -> impl Strategy<Value = Vec<Profile>> {
    (0usize..5).prop_flat_map(|n| {
        (0..n)
            .map(|i| arb_profile(format!("p{i}")))
            .collect::<Vec<_>>()
    })
}

/// Config values for each category, including malformed ones.
fn arb_config(category: &'static str) -> BoxedStrategy<Value> {
    match category {
        ids::RULE_MATURITY_CEILING => prop_oneof![
            arb_rating().prop_map(|r| json!({ "maxRating": r.as_str() })),
            Just(json!({ "maxRating": "TV-MA" })),
            Just(json!({})),
        ]
        .boxed(),
        ids::RULE_TITLE_BLOCK => prop_oneof![
            prop::collection::vec(arb_title(), 0..4).prop_map(|t| json!({ "titles": t })),
            Just(json!({ "titles": "Squid Game" })),
        ]
        .boxed(),
        ids::RULE_DAILY_LIMIT => (-10i64..1500)
            .prop_map(|m| json!({ "dailyMinutes": m }))
            .boxed(),
        ids::RULE_PROFILE_LOCK => (any::<bool>(), arb_pin())
            .prop_map(|(enabled, pin)| match pin {
                Some(pin) => json!({ "enabled": enabled, "pin": pin }),
                None => json!({ "enabled": enabled }),
            })
            .boxed(),
        _ => prop_oneof![
            any::<bool>().prop_map(|b| json!({ "enabled": b })),
            Just(json!({ "enabled": "yes" })),
        ]
        .boxed(),
    }
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    prop::sample::select(vec![
        ids::RULE_MATURITY_CEILING,
        ids::RULE_TITLE_BLOCK,
        ids::RULE_DAILY_LIMIT,
        ids::RULE_PROFILE_LOCK,
        ids::RULE_AUTOPLAY_NEXT_EPISODE,
        ids::RULE_AUTOPLAY_PREVIEWS,
        ids::RULE_PURCHASE_APPROVAL,
    ])
    .prop_flat_map(|category| {
        (arb_config(category), any::<bool>(), any::<bool>()).prop_map(
            move |(cfg, enabled, applies)| Rule {
                category: category.to_string(),
                label: category.to_string(),
                description: String::new(),
                enabled,
                applies_to_provider: applies,
                config: config(cfg),
            },
        )
    })
}

fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(arb_rule(), 0..8)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn diff_of_profile_with_itself_is_empty(p in arb_profile("p".to_string())) {
        prop_assert!(diff(&p, &p).is_empty());
    }

    #[test]
    fn every_active_rule_is_counted_exactly_once(
        rules in arb_rules(),
        profiles in arb_profiles(),
    ) {
        let run = enforce(&rules, &profiles);
        let active = rules.iter().filter(|r| r.is_active()).count() as u32;
        prop_assert_eq!(run.applied + run.skipped, active);
        prop_assert_eq!(run.evaluations.len(), active as usize * profiles.len());
    }

    #[test]
    fn rule_summaries_agree_with_run_counts(
        rules in arb_rules(),
        profiles in arb_profiles(),
    ) {
        let run = enforce(&rules, &profiles);
        let summaries = rule_summaries(&rules, &run);
        let count = |status: RuleStatus| {
            summaries.iter().filter(|s| s.status == status).count() as u32
        };
        prop_assert_eq!(summaries.len(), rules.len());
        prop_assert_eq!(
            (count(RuleStatus::Applied), count(RuleStatus::Skipped)),
            (run.applied, run.skipped)
        );
    }

    #[test]
    fn enforcement_is_deterministic(rules in arb_rules(), profiles in arb_profiles()) {
        let first = serde_json::to_string(&enforce(&rules, &profiles)).unwrap();
        let second = serde_json::to_string(&enforce(&rules, &profiles)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inactive_rules_change_nothing(rules in arb_rules(), profiles in arb_profiles()) {
        let inactive: Vec<Rule> = rules.into_iter().filter(|r| !r.is_active()).collect();
        let run = enforce(&inactive, &profiles);
        prop_assert!(run.changes.is_empty());
        prop_assert_eq!((run.applied, run.skipped), (0, 0));
        prop_assert_eq!(run.profiles, profiles);
    }

    #[test]
    fn profile_identity_and_history_are_preserved(
        rules in arb_rules(),
        profiles in arb_profiles(),
    ) {
        let run = enforce(&rules, &profiles);
        prop_assert_eq!(run.profiles.len(), profiles.len());
        for (before, after) in profiles.iter().zip(&run.profiles) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(&before.name, &after.name);
            prop_assert_eq!(before.kind, after.kind);
            prop_assert_eq!(&before.viewing_history, &after.viewing_history);
        }
    }

    #[test]
    fn maturity_ceiling_takes_the_minimum(
        cap in arb_rating(),
        profiles in arb_profiles(),
    ) {
        let rule = crate::test_support::rule(
            ids::RULE_MATURITY_CEILING,
            json!({ "maxRating": cap.as_str() }),
        );
        let run = enforce(std::slice::from_ref(&rule), &profiles);
        for (before, after) in profiles.iter().zip(&run.profiles) {
            prop_assert_eq!(after.maturity_rating, before.maturity_rating.min(cap));
        }
        let lowered = profiles.iter().filter(|p| p.maturity_rating > cap).count();
        prop_assert_eq!(run.changes.len(), lowered);
    }

    #[test]
    fn title_block_result_is_a_deduplicated_union(
        titles in prop::collection::vec(arb_title(), 0..6),
        profiles in arb_profiles(),
    ) {
        let rule = crate::test_support::rule(ids::RULE_TITLE_BLOCK, json!({ "titles": titles }));
        let run = enforce(std::slice::from_ref(&rule), &profiles);
        for (before, after) in profiles.iter().zip(&run.profiles) {
            let mut seen = std::collections::BTreeSet::new();
            prop_assert!(after.blocked_titles.iter().all(|t| seen.insert(t)));
            for t in before.blocked_titles.iter().chain(&titles) {
                prop_assert!(after.blocked_titles.contains(t));
            }
            prop_assert_eq!(after.blocked_titles.len(), seen.len());
        }
    }

    #[test]
    fn changes_only_reference_active_rules(rules in arb_rules(), profiles in arb_profiles()) {
        let run = enforce(&rules, &profiles);
        for change in &run.changes {
            prop_assert!(
                rules.iter().any(|r| r.is_active() && r.category == change.category),
                "change attributed to inactive rule {}", change.category
            );
        }
    }
}
