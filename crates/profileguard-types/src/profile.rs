use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal maturity tiers, lowest first. `Ord` follows the tier order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MaturityRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

impl MaturityRating {
    pub const ALL: [MaturityRating; 5] = [
        MaturityRating::G,
        MaturityRating::Pg,
        MaturityRating::Pg13,
        MaturityRating::R,
        MaturityRating::Nc17,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaturityRating::G => "G",
            MaturityRating::Pg => "PG",
            MaturityRating::Pg13 => "PG-13",
            MaturityRating::R => "R",
            MaturityRating::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for MaturityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRating(pub String);

impl fmt::Display for UnknownRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maturity rating: {}", self.0)
    }
}

impl std::error::Error for UnknownRating {}

impl FromStr for MaturityRating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaturityRating::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRating(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Kids,
    Standard,
    Adult,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileLock {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl ProfileLock {
    /// A stored PIN counts only when it is non-empty.
    pub fn stored_pin(&self) -> Option<&str> {
        self.pin.as_deref().filter(|p| !p.is_empty())
    }
}

/// Metadata for rule effects the provider cannot represent natively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalManagement {
    pub managed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_limit_minutes: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ViewingEntry {
    pub title: String,
    pub rating: MaturityRating,
    pub minutes: u32,
}

/// A streaming-service profile as seen by the engine.
///
/// `viewing_history` is carried through untouched; no rule writes to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProfileKind,
    pub maturity_rating: MaturityRating,
    #[serde(default)]
    pub blocked_titles: Vec<String>,
    #[serde(default)]
    pub profile_lock: ProfileLock,
    #[serde(default)]
    pub autoplay_next_episode: bool,
    #[serde(default)]
    pub autoplay_previews: bool,
    #[serde(default)]
    pub viewing_history: Vec<ViewingEntry>,
    #[serde(default)]
    pub externally_managed: ExternalManagement,
}
