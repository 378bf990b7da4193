//! Stable identifiers for rule categories and reason codes.
//!
//! A rule category is a dotted namespace; the segment before the first `.` is the
//! display group. Reason codes are short snake_case discriminators.

// Rule categories
pub const RULE_MATURITY_CEILING: &str = "content.maturity_ceiling";
pub const RULE_TITLE_BLOCK: &str = "content.title_block";
pub const RULE_DAILY_LIMIT: &str = "screen_time.daily_limit";
pub const RULE_PROFILE_LOCK: &str = "access.profile_lock";
pub const RULE_AUTOPLAY_NEXT_EPISODE: &str = "playback.autoplay_next_episode";
pub const RULE_AUTOPLAY_PREVIEWS: &str = "playback.autoplay_previews";
pub const RULE_PURCHASE_APPROVAL: &str = "purchases.require_approval";

// Config keys
pub const KEY_MAX_RATING: &str = "maxRating";
pub const KEY_TITLES: &str = "titles";
pub const KEY_DAILY_MINUTES: &str = "dailyMinutes";
pub const KEY_ENABLED: &str = "enabled";
pub const KEY_PIN: &str = "pin";

// Reason codes for invalid evaluations
pub const REASON_MISSING_KEY: &str = "missing_key";
pub const REASON_WRONG_TYPE: &str = "wrong_type";
pub const REASON_OUT_OF_RANGE: &str = "out_of_range";
pub const REASON_UNKNOWN_RATING: &str = "unknown_rating";
pub const REASON_MALFORMED_PIN: &str = "malformed_pin";
pub const REASON_LOCK_WITHOUT_PIN: &str = "lock_without_pin";
pub const REASON_UNKNOWN_CATEGORY: &str = "unknown_category";

/// Display group of a rule category (`"content.title_block"` -> `"content"`).
pub fn category_group(category: &str) -> &str {
    category.split_once('.').map(|(g, _)| g).unwrap_or(category)
}
