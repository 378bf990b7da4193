use crate::error::ConfigError;
use profileguard_types::RuleConfig;
use serde_json::Value;
use std::ops::RangeInclusive;

fn require<'a>(config: &'a RuleConfig, key: &'static str) -> Result<&'a Value, ConfigError> {
    match config.get(key) {
        None | Some(Value::Null) => Err(ConfigError::MissingKey { key }),
        Some(v) => Ok(v),
    }
}

pub fn require_bool(config: &RuleConfig, key: &'static str) -> Result<bool, ConfigError> {
    require(config, key)?.as_bool().ok_or(ConfigError::WrongType {
        key,
        expected: "a boolean",
    })
}

pub fn require_str<'a>(config: &'a RuleConfig, key: &'static str) -> Result<&'a str, ConfigError> {
    require(config, key)?.as_str().ok_or(ConfigError::WrongType {
        key,
        expected: "a string",
    })
}

/// Absent and `null` both read as `None`.
pub fn optional_str<'a>(
    config: &'a RuleConfig,
    key: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match config.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or(ConfigError::WrongType {
            key,
            expected: "a string",
        }),
    }
}

pub fn require_u32_in(
    config: &RuleConfig,
    key: &'static str,
    range: RangeInclusive<u32>,
) -> Result<u32, ConfigError> {
    let value = require(config, key)?;
    let n = value.as_i64().ok_or(ConfigError::WrongType {
        key,
        expected: "an integer",
    })?;
    u32::try_from(n)
        .ok()
        .filter(|n| range.contains(n))
        .ok_or_else(|| ConfigError::OutOfRange {
            key,
            value: n.to_string(),
        })
}

/// An array whose entries are all non-blank strings.
pub fn require_titles<'a>(
    config: &'a RuleConfig,
    key: &'static str,
) -> Result<Vec<&'a str>, ConfigError> {
    const EXPECTED: &str = "an array of non-empty strings";
    let items = require(config, key)?.as_array().ok_or(ConfigError::WrongType {
        key,
        expected: EXPECTED,
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .filter(|s| !s.trim().is_empty())
                .ok_or(ConfigError::WrongType {
                    key,
                    expected: EXPECTED,
                })
        })
        .collect()
}
