//! Explain registry for rule categories.
//!
//! Maps a rule category to a human-readable explanation with configuration guidance.

use crate::ids;

/// Explanation entry for a rule category.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short title of the rule.
    pub title: &'static str,
    /// What the rule does to a profile.
    pub description: &'static str,
    /// Config keys the rule reads and how they are validated.
    pub configuration: &'static str,
    /// Example `profileguard.toml` entry.
    pub example: &'static str,
}

/// Look up an explanation by rule category.
///
/// Returns `None` if the category is not recognized.
pub fn lookup_explanation(category: &str) -> Option<Explanation> {
    match category {
        ids::RULE_MATURITY_CEILING => Some(explain_maturity_ceiling()),
        ids::RULE_TITLE_BLOCK => Some(explain_title_block()),
        ids::RULE_DAILY_LIMIT => Some(explain_daily_limit()),
        ids::RULE_PROFILE_LOCK => Some(explain_profile_lock()),
        ids::RULE_AUTOPLAY_NEXT_EPISODE => Some(explain_autoplay_next_episode()),
        ids::RULE_AUTOPLAY_PREVIEWS => Some(explain_autoplay_previews()),
        ids::RULE_PURCHASE_APPROVAL => Some(explain_purchase_approval()),
        _ => None,
    }
}

/// List all known rule categories, in catalog order.
pub fn all_categories() -> &'static [&'static str] {
    &[
        ids::RULE_MATURITY_CEILING,
        ids::RULE_TITLE_BLOCK,
        ids::RULE_DAILY_LIMIT,
        ids::RULE_PROFILE_LOCK,
        ids::RULE_AUTOPLAY_NEXT_EPISODE,
        ids::RULE_AUTOPLAY_PREVIEWS,
        ids::RULE_PURCHASE_APPROVAL,
    ]
}

fn explain_maturity_ceiling() -> Explanation {
    Explanation {
        title: "Maturity Ceiling",
        description: "\
Caps the highest maturity rating a profile may watch.

The rating scale is ordered G < PG < PG-13 < R < NC-17. The rule lowers a
profile's ceiling to the configured cap and never raises it: a profile already
at or below the cap is left alone.",
        configuration: "\
maxRating  one of \"G\", \"PG\", \"PG-13\", \"R\", \"NC-17\" (required)

Any other value leaves every profile unchanged and is reported as invalid.",
        example: r#"[rules."content.maturity_ceiling"]
enabled = true
config = { maxRating = "PG-13" }"#,
    }
}

fn explain_title_block() -> Explanation {
    Explanation {
        title: "Blocked Titles",
        description: "\
Adds titles to each profile's blocked list.

Titles already blocked stay blocked; only new titles are reported. The rule
never unblocks anything.",
        configuration: "\
titles  array of non-empty strings (required)

Matching is exact and case-sensitive. A non-string or blank entry makes the
whole rule invalid for that run.",
        example: r#"[rules."content.title_block"]
enabled = true
config = { titles = ["Squid Game", "Wednesday"] }"#,
    }
}

fn explain_daily_limit() -> Explanation {
    Explanation {
        title: "Daily Screen-Time Limit",
        description: "\
Records a daily viewing limit in minutes.

The provider has no native time-limit setting, so the limit is stored as
metadata and the profile is flagged as externally managed. Whatever enforces the
limit must read that flag; the provider itself will not.",
        configuration: "\
dailyMinutes  integer from 1 to 1440 (required)",
        example: r#"[rules."screen_time.daily_limit"]
enabled = true
config = { dailyMinutes = 90 }"#,
    }
}

fn explain_profile_lock() -> Explanation {
    Explanation {
        title: "Profile Lock",
        description: "\
Turns the profile PIN lock on or off.

Enabling requires a PIN: either `pin` in the config or a PIN already stored on
the profile. With neither, the lock is not enabled and the evaluation is
reported as invalid. Disabling keeps the stored PIN.",
        configuration: "\
enabled  boolean (required)
pin      string of exactly 4 digits (optional; overrides the stored PIN)",
        example: r#"[rules."access.profile_lock"]
enabled = true
config = { enabled = true, pin = "4821" }"#,
    }
}

fn explain_autoplay_next_episode() -> Explanation {
    Explanation {
        title: "Autoplay Next Episode",
        description: "\
Sets whether the next episode of a series starts automatically.",
        configuration: "\
enabled  boolean (required)",
        example: r#"[rules."playback.autoplay_next_episode"]
enabled = true
config = { enabled = false }"#,
    }
}

fn explain_autoplay_previews() -> Explanation {
    Explanation {
        title: "Autoplay Previews",
        description: "\
Sets whether previews play automatically while browsing.",
        configuration: "\
enabled  boolean (required)",
        example: r#"[rules."playback.autoplay_previews"]
enabled = true
config = { enabled = false }"#,
    }
}

fn explain_purchase_approval() -> Explanation {
    Explanation {
        title: "Purchase Approval",
        description: "\
Requires approval before in-app purchases.

The current provider has no mapping for this category, so the rule is listed
but never applied, whether or not it is enabled.",
        configuration: "\
(none)",
        example: r#"[rules."purchases.require_approval"]
enabled = true"#,
    }
}
