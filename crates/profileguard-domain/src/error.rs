use profileguard_types::ids;
use thiserror::Error;

/// Why a rule could not be applied to a profile.
///
/// These never escape the engine: each one turns the (rule, profile) pair into a
/// no-op and is reported as an `invalid` evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing config key `{key}`")]
    MissingKey { key: &'static str },

    #[error("config key `{key}` must be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("config key `{key}` is out of range: {value}")]
    OutOfRange { key: &'static str, value: String },

    #[error("unknown maturity rating: {value}")]
    UnknownRating { value: String },

    #[error("PIN must be exactly 4 digits")]
    MalformedPin,

    #[error("cannot enable profile lock without a PIN")]
    LockWithoutPin,

    #[error("no mutation registered for category `{0}`")]
    UnknownCategory(String),
}

impl ConfigError {
    /// Stable reason code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingKey { .. } => ids::REASON_MISSING_KEY,
            ConfigError::WrongType { .. } => ids::REASON_WRONG_TYPE,
            ConfigError::OutOfRange { .. } => ids::REASON_OUT_OF_RANGE,
            ConfigError::UnknownRating { .. } => ids::REASON_UNKNOWN_RATING,
            ConfigError::MalformedPin => ids::REASON_MALFORMED_PIN,
            ConfigError::LockWithoutPin => ids::REASON_LOCK_WITHOUT_PIN,
            ConfigError::UnknownCategory(_) => ids::REASON_UNKNOWN_CATEGORY,
        }
    }
}
