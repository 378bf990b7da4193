use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile fields a rule is able to change, in diff order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    MaturityRating,
    BlockedTitles,
    ProfileLock,
    AutoplayNextEpisode,
    AutoplayPreviews,
    ExternallyManaged,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::MaturityRating => "maturityRating",
            ProfileField::BlockedTitles => "blockedTitles",
            ProfileField::ProfileLock => "profileLock",
            ProfileField::AutoplayNextEpisode => "autoplayNextEpisode",
            ProfileField::AutoplayPreviews => "autoplayPreviews",
            ProfileField::ExternallyManaged => "externallyManaged",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-level difference between two versions of the same profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldChange {
    pub field: ProfileField,
    pub description: String,
    /// Set members that appeared (blocked titles only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<String>,
    /// Set members that disappeared (blocked titles only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<String>,
}

/// A field change attributed to the rule that caused it on one profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDelta {
    pub profile_id: String,
    pub profile_name: String,
    pub category: String,
    pub field: ProfileField,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<String>,
}

impl ChangeDelta {
    /// `profileId:field`, the key consumers use to track per-field emphasis.
    pub fn highlight_key(&self) -> String {
        format!("{}:{}", self.profile_id, self.field)
    }
}
