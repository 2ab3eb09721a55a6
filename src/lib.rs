//! # Word Hashing: Letter n-gram count vectors
//!
//! Word hashing turns a tokenized document into a fixed-width count vector
//! indexed by a precomputed vocabulary of letter n-grams ("tri-letters"),
//! the input representation of DSSM and CDSSM text-matching models.
//!
//! ## Quick Start
//!
//! ```rust
//! use word_hashing::{TermIndex, WordHashing};
//!
//! let index = TermIndex::from_json(r##"{"": 0, "st#": 1, "#te": 2, "est": 3, "tes": 4}"##)?;
//! let encoder = WordHashing::new(index);
//!
//! // One document, all n-grams in one list
//! let doc = encoder.encode_flat(&["#te", "tes", "est", "st#"])?;
//! assert_eq!(doc.data(), &[0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
//!
//! // One row per word; unknown n-grams land in slot 0
//! let words = encoder.encode_nested(&[vec!["#te", "tes", "est", "st#"], vec!["oov"]])?;
//! assert_eq!(words[1].data(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! # Ok::<(), word_hashing::WordHashingError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Term index**: immutable n-gram → slot mapping; slot 0 is the
//!   out-of-vocabulary bucket
//! - **Flat input**: all n-grams of a document → one vector
//! - **Nested input**: n-grams grouped per word → one row per word
//! - **Width**: always `term_index.len() + 1`, whatever the input

pub mod config;
pub mod counter;
pub mod encoder;
pub mod error;
pub mod similarity;
pub mod term_index;
pub mod tokens;
pub mod unit;
pub mod vector;

// Re-exports for convenience
pub use config::{EmptyInputPolicy, EncoderConfig};
pub use counter::TermCounter;
pub use encoder::WordHashing;
pub use error::{Result, WordHashingError};
pub use similarity::{Metric, Similarity};
pub use term_index::{TermIndex, OOV_INDEX};
pub use tokens::TokenInput;
pub use unit::Unit;
pub use vector::{Hashing, HashingMatrix, HashingVector};
