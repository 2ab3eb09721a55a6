//! Token input shapes.
//!
//! A document reaches the encoder in one of two shapes:
//!
//! - **Flat**: every letter n-gram of the document in one list
//!   (`["#te", "tes", "est", "st#"]`), the input of a DSSM model.
//! - **Nested**: one list of n-grams per word
//!   (`[["#te", "tes"], ["#is", "is#"]]`), the input of a CDSSM model.
//!
//! The shape is carried by the [`TokenInput`] discriminant, so a single
//! input can never mix bare terms and word groups. Untyped JSON token lists
//! are classified by [`TokenInput::from_json`]: any top-level list makes the
//! whole input nested, and a bare term next to a list is rejected.

use crate::error::{Result, WordHashingError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tokenized document, flat or grouped by word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenInput {
    /// All n-grams of one document
    Flat(Vec<String>),
    /// N-grams grouped per word, in word order
    Nested(Vec<Vec<String>>),
}

impl TokenInput {
    /// Build a flat input from any sequence of terms.
    pub fn flat<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenInput::Flat(terms.into_iter().map(Into::into).collect())
    }

    /// Build a nested input from a sequence of per-word term sequences.
    pub fn nested<I, W, S>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenInput::Nested(
            words
                .into_iter()
                .map(|w| w.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Parse and classify a JSON token list.
    ///
    /// # Example
    /// ```rust
    /// use word_hashing::TokenInput;
    ///
    /// let input = TokenInput::from_json(r##"[["#te", "tes"], ["oov"]]"##).unwrap();
    /// assert!(input.is_nested());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Classify an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(WordHashingError::NotAList(kind(other).to_string())),
        };

        if items.iter().any(Value::is_array) {
            let words = items
                .iter()
                .enumerate()
                .map(|(word, item)| match item {
                    Value::Array(terms) => terms
                        .iter()
                        .enumerate()
                        .map(|(position, term)| as_term(term, Some(word), position))
                        .collect::<Result<Vec<_>>>(),
                    _ => Err(WordHashingError::MixedShape { position: word }),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(TokenInput::Nested(words))
        } else {
            let terms = items
                .iter()
                .enumerate()
                .map(|(position, term)| as_term(term, None, position))
                .collect::<Result<Vec<_>>>()?;
            Ok(TokenInput::Flat(terms))
        }
    }

    /// Whether the input is grouped by word.
    pub fn is_nested(&self) -> bool {
        matches!(self, TokenInput::Nested(_))
    }

    /// Number of top-level elements: terms for flat input, words for nested.
    pub fn len(&self) -> usize {
        match self {
            TokenInput::Flat(terms) => terms.len(),
            TokenInput::Nested(words) => words.len(),
        }
    }

    /// Check whether there are no top-level elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of terms across all words.
    pub fn term_count(&self) -> usize {
        match self {
            TokenInput::Flat(terms) => terms.len(),
            TokenInput::Nested(words) => words.iter().map(Vec::len).sum(),
        }
    }
}

impl From<Vec<String>> for TokenInput {
    fn from(terms: Vec<String>) -> Self {
        TokenInput::Flat(terms)
    }
}

impl From<Vec<Vec<String>>> for TokenInput {
    fn from(words: Vec<Vec<String>>) -> Self {
        TokenInput::Nested(words)
    }
}

fn as_term(value: &Value, word: Option<usize>, position: usize) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(WordHashingError::InvalidToken {
            word,
            position,
            found: kind(other).to_string(),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
