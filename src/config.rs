//! Encoder configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What the encoder does with an input that has no top-level elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Fail with [`WordHashingError::EmptyInput`](crate::WordHashingError::EmptyInput)
    #[default]
    Reject,
    /// Return an all-zero vector (flat) or a matrix with no rows (nested)
    Zeros,
}

/// Options for [`WordHashing`](crate::WordHashing).
///
/// Missing fields take their defaults when deserialized:
///
/// ```rust
/// use word_hashing::{EmptyInputPolicy, EncoderConfig};
///
/// let config = EncoderConfig::from_json(r#"{"empty_input": "zeros"}"#).unwrap();
/// assert_eq!(config.empty_input, EmptyInputPolicy::Zeros);
///
/// let config = EncoderConfig::from_json("{}").unwrap();
/// assert_eq!(config, EncoderConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Handling of empty top-level input
    pub empty_input: EmptyInputPolicy,
}

impl EncoderConfig {
    /// Parse a configuration from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the empty-input policy.
    #[must_use]
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }
}
