use profileguard_types::ChangeDelta;
use std::collections::BTreeMap;
use time::{Duration, OffsetDateTime};

/// How long a changed field stays highlighted after its last change.
pub const HIGHLIGHT_DECAY: Duration = Duration::seconds(2);

/// Tracks which `profileId:field` keys are currently highlighted.
///
/// Time is always supplied by the caller, so the schedule itself is deterministic.
#[derive(Clone, Debug, Default)]
pub struct HighlightSchedule {
    expiries: BTreeMap<String, OffsetDateTime>,
}

impl HighlightSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight `key` until `now + HIGHLIGHT_DECAY`. Re-highlighting extends the expiry.
    pub fn highlight(&mut self, key: impl Into<String>, now: OffsetDateTime) {
        self.expiries.insert(key.into(), now + HIGHLIGHT_DECAY);
    }

    pub fn highlight_changes(&mut self, changes: &[ChangeDelta], now: OffsetDateTime) {
        for change in changes {
            self.highlight(change.highlight_key(), now);
        }
    }

    pub fn is_active(&self, key: &str, now: OffsetDateTime) -> bool {
        self.expiries.get(key).is_some_and(|expiry| *expiry > now)
    }

    /// Live keys in sorted order.
    pub fn active(&self, now: OffsetDateTime) -> Vec<&str> {
        self.expiries
            .iter()
            .filter(|(_, expiry)| **expiry > now)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Forget expired keys.
    pub fn prune(&mut self, now: OffsetDateTime) {
        self.expiries.retain(|_, expiry| *expiry > now);
    }

    pub fn len(&self) -> usize {
        self.expiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profileguard_types::ProfileField;
    use time::macros::datetime;

    const T0: OffsetDateTime = datetime!(2026-01-01 12:00:00 UTC);

    #[test]
    fn highlight_expires_after_decay() {
        let mut s = HighlightSchedule::new();
        s.highlight("emma:maturityRating", T0);

        assert!(s.is_active("emma:maturityRating", T0 + Duration::seconds(1)));
        assert!(!s.is_active("emma:maturityRating", T0 + Duration::seconds(2)));
        assert!(!s.is_active("noah:maturityRating", T0));
    }

    #[test]
    fn rehighlight_extends_expiry() {
        let mut s = HighlightSchedule::new();
        s.highlight("emma:blockedTitles", T0);
        s.highlight("emma:blockedTitles", T0 + Duration::milliseconds(1500));

        assert!(s.is_active("emma:blockedTitles", T0 + Duration::milliseconds(3000)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn highlights_changes_by_profile_and_field() {
        let change = ChangeDelta {
            profile_id: "emma".to_string(),
            profile_name: "Emma".to_string(),
            category: "content.maturity_ceiling".to_string(),
            field: ProfileField::MaturityRating,
            description: "maturity rating lowered to PG-13".to_string(),
            added: Vec::new(),
            removed: Vec::new(),
        };
        let mut s = HighlightSchedule::new();
        s.highlight("noah:autoplayPreviews", T0 - Duration::seconds(5));
        s.highlight_changes(&[change], T0);

        assert_eq!(s.active(T0), vec!["emma:maturityRating"]);

        s.prune(T0);
        assert_eq!(s.len(), 1);
        s.prune(T0 + HIGHLIGHT_DECAY);
        assert!(s.is_empty());
    }
}
