//! Runtime knobs for numbers and comparisons.
//!
//! Configuration is plain `Copy` data. Profiles are exposed as constants in
//! the same way for every knob, and a whole [`Config`] can be read from JSON
//! for harnesses that drive the engine from files.
//!
//! | Knob | Default | Effect |
//! |------|---------|--------|
//! | [`NumberConfig::sanity_check`] | `false` | validate every egested message with a [`crate::Watcher`] |
//! | [`CompareMode`] | [`CompareMode::Lenient`] | whether `-0` and `0` compare equal |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-number driver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberConfig {
    /// Pass every message returned by the number through a protocol watcher.
    pub sanity_check: bool,
}

impl NumberConfig {
    /// Messages are returned as produced by the strategy.
    pub const UNCHECKED: NumberConfig = NumberConfig {
        sanity_check: false,
    };

    /// Messages are validated against the protocol invariants before being
    /// returned. Useful while developing new strategies.
    pub const SANITY_CHECKED: NumberConfig = NumberConfig { sanity_check: true };
}

/// Comparison policy for signed zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// `-0` and `0` compare equal.
    #[default]
    Lenient,
    /// `-0` compares strictly below `0`.
    Pedantic,
}

impl CompareMode {
    /// Whether signed zero is distinguished from zero.
    pub const fn is_pedantic(self) -> bool {
        matches!(self, CompareMode::Pedantic)
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Settings applied to numbers built by the caller.
    pub number: NumberConfig,
    /// Mode used by comparisons.
    pub compare: CompareMode,
}

/// Failure to load a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Reads a configuration from a JSON document. Missing fields keep their
    /// defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialises the configuration to compact JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
