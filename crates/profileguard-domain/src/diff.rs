//! Field-by-field comparison of two versions of one profile.
//!
//! Returns one [`FieldChange`] per changed field, in [`ProfileField`] order, and an
//! empty list iff every compared field is equal. Identity fields and viewing
//! history are not compared; no rule can change them.

use profileguard_types::{FieldChange, Profile, ProfileField};

pub fn diff(before: &Profile, after: &Profile) -> Vec<FieldChange> {
    let mut out = Vec::new();

    if before.maturity_rating != after.maturity_rating {
        let direction = if after.maturity_rating < before.maturity_rating {
            "lowered"
        } else {
            "raised"
        };
        out.push(change(
            ProfileField::MaturityRating,
            format!("maturity rating {direction} to {}", after.maturity_rating),
        ));
    }

    let added = missing_from(&after.blocked_titles, &before.blocked_titles);
    let removed = missing_from(&before.blocked_titles, &after.blocked_titles);
    if !added.is_empty() || !removed.is_empty() {
        let mut parts = Vec::new();
        if !added.is_empty() {
            parts.push(format!("blocked {}", count(added.len(), "new title")));
        }
        if !removed.is_empty() {
            parts.push(format!("unblocked {}", count(removed.len(), "title")));
        }
        out.push(FieldChange {
            field: ProfileField::BlockedTitles,
            description: parts.join(", "),
            added,
            removed,
        });
    }

    let (lock_before, lock_after) = (&before.profile_lock, &after.profile_lock);
    if lock_before.enabled != lock_after.enabled {
        let state = if lock_after.enabled { "enabled" } else { "disabled" };
        out.push(change(
            ProfileField::ProfileLock,
            format!("profile lock {state}"),
        ));
    } else if lock_before.stored_pin() != lock_after.stored_pin() {
        out.push(change(
            ProfileField::ProfileLock,
            "profile lock PIN updated".to_string(),
        ));
    }

    if before.autoplay_next_episode != after.autoplay_next_episode {
        out.push(change(
            ProfileField::AutoplayNextEpisode,
            format!("autoplay next episode {}", on_off(after.autoplay_next_episode)),
        ));
    }

    if before.autoplay_previews != after.autoplay_previews {
        out.push(change(
            ProfileField::AutoplayPreviews,
            format!("autoplay previews {}", on_off(after.autoplay_previews)),
        ));
    }

    if before.externally_managed != after.externally_managed {
        let ext = &after.externally_managed;
        let description = match (ext.managed, ext.daily_limit_minutes) {
            (true, Some(minutes)) => {
                format!("daily limit of {minutes} minutes recorded as externally managed")
            }
            (true, None) => "marked as externally managed".to_string(),
            (false, _) => "externally managed flag cleared".to_string(),
        };
        out.push(change(ProfileField::ExternallyManaged, description));
    }

    out
}

fn change(field: ProfileField, description: String) -> FieldChange {
    FieldChange {
        field,
        description,
        added: Vec::new(),
        removed: Vec::new(),
    }
}

/// Members of `from` that `other` lacks, first occurrence order, no repeats.
fn missing_from(from: &[String], other: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in from {
        if !other.contains(item) && !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
