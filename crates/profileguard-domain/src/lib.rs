//! Pure rule enforcement (no IO).
//!
//! Input: an ordered rule list and a profile collection constructed elsewhere.
//! Output: the enforced profiles, attributed changes and applied/skipped counts.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod diff;
pub mod error;
pub mod mutations;
pub mod report;
pub mod seed;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use catalog::{RuleCatalog, default_rules};
pub use diff::diff;
pub use engine::enforce;
pub use error::ConfigError;
pub use mutations::mutate;
pub use report::rule_summaries;
pub use seed::seed_profiles;
