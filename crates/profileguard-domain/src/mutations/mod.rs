//! Mutation dispatch: one pure function per rule category.
//!
//! Dispatch goes through a table keyed by category. Adding a category means adding
//! a module and a table row; the engine does not change.

use crate::error::ConfigError;
use profileguard_types::{ids, Profile, Rule, RuleConfig};

mod autoplay;
mod config;
mod daily_limit;
mod maturity_ceiling;
mod profile_lock;
mod title_block;


/// `(config, profile) -> candidate`. Must not depend on anything but its arguments.
pub type MutateFn = fn(&RuleConfig, &Profile) -> Result<Profile, ConfigError>;

struct Mutation {
    category: &'static str,
    apply: MutateFn,
}

const MUTATIONS: &[Mutation] = &[
    Mutation {
        category: ids::RULE_MATURITY_CEILING,
        apply: maturity_ceiling::apply,
    },
    Mutation {
        category: ids::RULE_TITLE_BLOCK,
        apply: title_block::apply,
    },
    Mutation {
        category: ids::RULE_DAILY_LIMIT,
        apply: daily_limit::apply,
    },
    Mutation {
        category: ids::RULE_PROFILE_LOCK,
        apply: profile_lock::apply,
    },
    Mutation {
        category: ids::RULE_AUTOPLAY_NEXT_EPISODE,
        apply: autoplay::apply_next_episode,
    },
    Mutation {
        category: ids::RULE_AUTOPLAY_PREVIEWS,
        apply: autoplay::apply_previews,
    },
];

pub fn mutation_for(category: &str) -> Option<MutateFn> {
    MUTATIONS
        .iter()
        .find(|m| m.category == category)
        .map(|m| m.apply)
}

/// Categories that have a mutation, in table order.
#[cfg(test)]
pub(crate) fn registered_categories() -> impl Iterator<Item = &'static str> {
    MUTATIONS.iter().map(|m| m.category)
}

/// Compute the candidate profile for `rule`. The input profile is never modified.
pub fn mutate(rule: &Rule, profile: &Profile) -> Result<Profile, ConfigError> {
    let apply = mutation_for(&rule.category)
        .ok_or_else(|| ConfigError::UnknownCategory(rule.category.clone()))?;
    apply(&rule.config, profile)
}
