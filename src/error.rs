//! Error types for word hashing.

use thiserror::Error;

/// Word-hashing error types.
#[derive(Error, Debug)]
pub enum WordHashingError {
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Term-index mapping with no entries
    #[error("Term index is empty")]
    EmptyVocabulary,

    /// A term index that does not fit in the output vector
    #[error("Index {index} for term {term:?} is out of range for {dimensions} dimensions")]
    IndexOutOfRange {
        term: String,
        index: usize,
        dimensions: usize,
    },

    /// Empty input where non-empty was required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Token input that is not a list
    #[error("Expected a list of tokens, got {0}")]
    NotAList(String),

    /// Flat terms and nested word groups at the same level
    #[error("Mixed flat and nested tokens at position {position}")]
    MixedShape { position: usize },

    /// A token that is neither a term nor a group of terms.
    ///
    /// `word` is set for nested input; `position` is then the token's index
    /// inside that word.
    #[error(
        "Invalid token at position {position}{}: expected string, got {found}",
        .word.map(|w| format!(" of word {}", w)).unwrap_or_default()
    )]
    InvalidToken {
        word: Option<usize>,
        position: usize,
        found: String,
    },

    /// Invalid vector dimensions
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result type alias for word-hashing operations.
pub type Result<T> = std::result::Result<T, WordHashingError>;
