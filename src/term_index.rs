//! Term Index: Immutable term → index mapping.
//!
//! The term index is produced by an external vocabulary builder. Every
//! known n-gram owns one slot of the output vector; slot [`OOV_INDEX`]
//! collects everything the vocabulary has never seen.
//!
//! The reservation of slot 0 is a convention, not a check: a real term
//! mapped to 0 (typically the `''` padding entry) shares the bucket with
//! out-of-vocabulary terms.

use crate::error::{Result, WordHashingError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index that unknown terms fall back to.
pub const OOV_INDEX: usize = 0;

/// A validated, immutable mapping from terms to vector positions.
///
/// Output vectors built against this index have [`TermIndex::dimensions`]
/// slots: one per entry plus the reserved out-of-vocabulary slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, usize>", into = "HashMap<String, usize>")]
pub struct TermIndex {
    terms: HashMap<String, usize>,
}

impl TermIndex {
    /// Create a term index from an existing mapping.
    ///
    /// Fails if the mapping is empty or if any index would not fit in a
    /// vector of `len + 1` slots. Indices need not be contiguous.
    pub fn new(terms: HashMap<String, usize>) -> Result<Self> {
        if terms.is_empty() {
            return Err(WordHashingError::EmptyVocabulary);
        }

        let dimensions = terms.len() + 1;
        if let Some((term, &index)) = terms.iter().find(|&(_, &index)| index >= dimensions) {
            return Err(WordHashingError::IndexOutOfRange {
                term: term.clone(),
                index,
                dimensions,
            });
        }

        tracing::debug!(terms = terms.len(), dimensions, "built term index");
        Ok(Self { terms })
    }

    /// Create a term index from `(term, index)` pairs.
    ///
    /// Later pairs win when a term repeats.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(t, i)| (t.into(), i)).collect())
    }

    /// Number an ordered list of terms `1..=N`, leaving 0 for unknown terms.
    ///
    /// Duplicate terms keep their first position.
    ///
    /// # Example
    /// ```rust
    /// use word_hashing::TermIndex;
    ///
    /// let index = TermIndex::from_terms(["#te", "tes", "est", "st#"]).unwrap();
    /// assert_eq!(index.get("#te"), Some(1));
    /// assert_eq!(index.dimensions(), 5);
    /// ```
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping: HashMap<String, usize> = HashMap::new();
        for term in terms {
            let next = mapping.len() + 1;
            mapping.entry(term.into()).or_insert(next);
        }
        Self::new(mapping)
    }

    /// Parse a term index from a JSON object of `{"term": index}`.
    ///
    /// # Example
    /// ```rust
    /// use word_hashing::TermIndex;
    ///
    /// let index = TermIndex::from_json(r##"{"": 0, "st#": 1, "#te": 2}"##).unwrap();
    /// assert_eq!(index.len(), 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let terms: HashMap<String, usize> = serde_json::from_str(json)?;
        Self::new(terms)
    }

    /// Number of mapped terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false for a constructed index; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Width of every vector encoded against this index.
    pub fn dimensions(&self) -> usize {
        self.terms.len() + 1
    }

    /// Look up a term, returning `None` when it is out of vocabulary.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// Look up a term, falling back to [`OOV_INDEX`].
    pub fn index_of(&self, term: &str) -> usize {
        self.get(term).unwrap_or(OOV_INDEX)
    }

    /// Check whether a term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Iterate over `(term, index)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.terms.iter().map(|(t, &i)| (t.as_str(), i))
    }
}

impl TryFrom<HashMap<String, usize>> for TermIndex {
    type Error = WordHashingError;

    fn try_from(terms: HashMap<String, usize>) -> Result<Self> {
        Self::new(terms)
    }
}

impl From<TermIndex> for HashMap<String, usize> {
    fn from(index: TermIndex) -> Self {
        index.terms
    }
}
