//! Encoder: Letter n-grams to word-hashing vectors.
//!
//! Word hashing represents a document by how often each letter n-gram
//! occurs in it. The vector width is fixed by the term index
//! (`len + 1`), so vocabulary growth from rare words never changes the
//! model's input size: every n-gram the index has never seen is counted in
//! the reserved out-of-vocabulary slot.
//!
//! # Shapes
//!
//! ```text
//! flat    ["#te", "tes", "est", "st#"]        -> [0, 1, 1, 1, 1, 0]
//! nested  [["#te", "tes", "est", "st#"],       -> [[0, 1, 1, 1, 1, 0],
//!          ["oov"]]                               [1, 0, 0, 0, 0, 0]]
//! ```
//!
//! # Collisions on the OOV slot
//!
//! Flat encoding *adds* counts, so every unknown term contributes to slot
//! [`OOV_INDEX`] and the vector total always equals the number of input
//! terms. Nested encoding *sets* each row cell to the count of the term
//! that maps there; when several distinct terms of one word share a slot,
//! the last of them in first-seen order wins.

use crate::config::{EmptyInputPolicy, EncoderConfig};
use crate::counter::TermCounter;
use crate::error::{Result, WordHashingError};
use crate::term_index::{TermIndex, OOV_INDEX};
use crate::tokens::TokenInput;
use crate::vector::{Hashing, HashingMatrix, HashingVector};

/// Word-hashing encoder over a fixed term index.
///
/// Holds no mutable state, so one encoder can be shared across threads and
/// reused for any number of documents.
#[derive(Clone, Debug)]
pub struct WordHashing {
    term_index: TermIndex,
    config: EncoderConfig,
}

impl WordHashing {
    /// Create a new encoder with the default configuration.
    pub fn new(term_index: TermIndex) -> Self {
        Self::with_config(term_index, EncoderConfig::default())
    }

    /// Create a new encoder with an explicit configuration.
    pub fn with_config(term_index: TermIndex, config: EncoderConfig) -> Self {
        Self { term_index, config }
    }

    /// Get the dimensionality of every produced vector.
    pub fn dimensions(&self) -> usize {
        self.term_index.dimensions()
    }

    /// Get the term index.
    pub fn term_index(&self) -> &TermIndex {
        &self.term_index
    }

    /// Get the configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode either input shape.
    ///
    /// # Example
    /// ```rust
    /// use word_hashing::{TermIndex, TokenInput, WordHashing};
    ///
    /// let index = TermIndex::from_json(r##"{"": 0, "st#": 1, "#te": 2, "est": 3, "tes": 4}"##)?;
    /// let encoder = WordHashing::new(index);
    ///
    /// let hashing = encoder.encode(&TokenInput::nested([vec!["#te", "tes", "est", "st#"], vec!["oov"]]))?;
    /// let matrix = hashing.as_matrix().unwrap();
    /// assert_eq!(matrix[0].data(), &[0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    /// assert_eq!(matrix[1].data(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// # Ok::<(), word_hashing::WordHashingError>(())
    /// ```
    pub fn encode(&self, input: &TokenInput) -> Result<Hashing> {
        match input {
            TokenInput::Flat(terms) => self.encode_flat(terms).map(Hashing::Vector),
            TokenInput::Nested(words) => self.encode_nested(words).map(Hashing::Matrix),
        }
    }

    /// Encode all n-grams of one document into a single count vector.
    ///
    /// Unknown terms are summed into slot [`OOV_INDEX`].
    pub fn encode_flat<S: AsRef<str>>(&self, terms: &[S]) -> Result<HashingVector> {
        if terms.is_empty() {
            self.check_empty("flat")?;
        }

        let counter = TermCounter::from_terms(terms);
        let mut hashing = HashingVector::zeros(self.dimensions());
        let mut oov = 0;

        for (term, count) in counter.iter() {
            let index = match self.term_index.get(term) {
                Some(index) => index,
                None => {
                    oov += count;
                    OOV_INDEX
                }
            };
            hashing.add(index, count);
        }

        tracing::trace!(
            terms = counter.total(),
            distinct = counter.distinct(),
            oov,
            dimensions = self.dimensions(),
            "encoded flat n-grams"
        );
        Ok(hashing)
    }

    /// Encode per-word n-gram groups into one row per word.
    ///
    /// A word with no n-grams produces an all-zero row.
    pub fn encode_nested<W, S>(&self, words: &[W]) -> Result<HashingMatrix>
    where
        W: AsRef<[S]>,
        S: AsRef<str>,
    {
        if words.is_empty() {
            self.check_empty("nested")?;
        }

        let mut hashing = HashingMatrix::zeros(words.len(), self.dimensions());
        let mut oov_words = 0;

        for (i, word) in words.iter().enumerate() {
            let counter = TermCounter::from_terms(word.as_ref());
            let row = hashing.row_mut(i);
            let mut has_oov = false;

            for (term, count) in counter.iter() {
                let index = self.term_index.get(term).unwrap_or_else(|| {
                    has_oov = true;
                    OOV_INDEX
                });
                row.set(index, count);
            }

            if has_oov {
                oov_words += 1;
            }
        }

        tracing::trace!(
            words = words.len(),
            oov_words,
            dimensions = self.dimensions(),
            "encoded nested n-grams"
        );
        Ok(hashing)
    }

    fn check_empty(&self, shape: &str) -> Result<()> {
        match self.config.empty_input {
            EmptyInputPolicy::Reject => Err(WordHashingError::EmptyInput(format!(
                "{} token input has no elements",
                shape
            ))),
            EmptyInputPolicy::Zeros => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letters() -> WordHashing {
        let index = TermIndex::from_pairs([("", 0), ("st#", 1), ("#te", 2), ("est", 3), ("tes", 4)])
            .expect("valid mapping");
        WordHashing::new(index)
    }

    #[test]
    fn test_known_term_routing() {
        let encoder = letters();
        let v = encoder
            .encode_flat(&["#te", "tes", "est", "st#"])
            .expect("encode");

        assert_eq!(v.data(), &[0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_oov_aggregation() {
        let index = TermIndex::from_pairs([("a", 1)]).expect("valid mapping");
        let encoder = WordHashing::new(index);

        let v = encoder.encode_flat(&["a", "b", "c"]).expect("encode");
        assert_eq!(v.into_vec(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_flat_oov_collides_with_zero_term() {
        // '' owns slot 0, which unknown terms share
        let encoder = letters();
        let v = encoder.encode_flat(&["", "oov", "oov", "tes"]).expect("encode");
        assert_eq!(v.data(), &[3.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_repeated_terms_counted() {
        let encoder = letters();
        let v = encoder.encode_flat(&["est", "est", "est"]).expect("encode");
        assert_eq!(v[3], 3.0);
        assert_eq!(v.total(), 3.0);
    }

    #[test]
    fn test_nested_shape() {
        let encoder = letters();
        let m = encoder
            .encode_nested(&[vec!["#te", "tes", "est", "st#"], vec!["oov"]])
            .expect("encode");

        assert_eq!(m.shape(), (2, 6));
        assert_eq!(m[0].data(), &[0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
        assert_eq!(m[1].data(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_nested_rows_overwrite_on_collision() {
        let encoder = letters();
        let m = encoder
            .encode_nested(&[vec!["x", "x", "x", "y"], vec!["y", "x", "x"]])
            .expect("encode");

        // last distinct term mapped to slot 0 wins
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][0], 2.0);
    }

    #[test]
    fn test_nested_empty_word_is_zero_row() {
        let encoder = letters();
        let words: Vec<Vec<&str>> = vec![vec![], vec!["tes"]];
        let m = encoder.encode_nested(&words).expect("encode");

        assert_eq!(m[0].nnz(), 0);
        assert_eq!(m[1].data(), &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_dispatch() {
        let encoder = letters();

        let flat = encoder
            .encode(&TokenInput::flat(["#te", "oov"]))
            .expect("encode");
        assert_eq!(
            flat.as_vector().map(HashingVector::data),
            Some(&[1.0, 0.0, 1.0, 0.0, 0.0, 0.0][..])
        );

        let nested = encoder
            .encode(&TokenInput::nested([vec!["#te"], vec!["oov"]]))
            .expect("encode");
        assert_eq!(nested.as_matrix().map(HashingMatrix::n_rows), Some(2));
        assert_eq!(nested.dimensions(), 6);
    }

    #[test]
    fn test_empty_input_rejected_by_default() {
        let encoder = letters();
        let empty: [&str; 0] = [];
        assert!(matches!(
            encoder.encode_flat(&empty),
            Err(WordHashingError::EmptyInput(_))
        ));
        assert!(matches!(
            encoder.encode(&TokenInput::Nested(vec![])),
            Err(WordHashingError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_empty_input_zeros_policy() {
        let config = EncoderConfig::default().with_empty_input(EmptyInputPolicy::Zeros);
        let encoder = WordHashing::with_config(letters().term_index().clone(), config);

        let v = encoder.encode(&TokenInput::Flat(vec![])).expect("zeros");
        assert_eq!(v, Hashing::Vector(HashingVector::zeros(6)));

        let m = encoder.encode(&TokenInput::Nested(vec![])).expect("zeros");
        assert_eq!(m.as_matrix().map(HashingMatrix::shape), Some((0, 6)));
    }

    #[test]
    fn test_repeated_encoding_identical() {
        let encoder = letters();
        let input = TokenInput::nested([vec!["#te", "tes", "oov"], vec!["est", "est"]]);

        let first = encoder.encode(&input).expect("encode");
        let second = encoder.encode(&input).expect("encode");
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordHashing>();
    }

    fn term() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("".to_string()),
            Just("st#".to_string()),
            Just("#te".to_string()),
            Just("est".to_string()),
            Just("tes".to_string()),
            "[a-z#]{3}",
        ]
    }

    proptest! {
        #[test]
        fn prop_flat_length_and_conservation(terms in prop::collection::vec(term(), 1..64)) {
            let encoder = letters();
            let v = encoder.encode_flat(&terms).expect("encode");

            prop_assert_eq!(v.dimensions(), encoder.term_index().len() + 1);
            prop_assert_eq!(v.total(), terms.len() as f64);
            prop_assert!(v.data().iter().all(|&x| x >= 0.0 && x.fract() == 0.0));
        }

        #[test]
        fn prop_flat_order_invariant(terms in prop::collection::vec(term(), 1..64)) {
            let encoder = letters();
            let mut reversed = terms.clone();
            reversed.reverse();
            let mut sorted = terms.clone();
            sorted.sort();

            let v = encoder.encode_flat(&terms).expect("encode");
            prop_assert_eq!(&v, &encoder.encode_flat(&reversed).expect("encode"));
            prop_assert_eq!(&v, &encoder.encode_flat(&sorted).expect("encode"));
        }

        #[test]
        fn prop_nested_shape(words in prop::collection::vec(prop::collection::vec(term(), 0..8), 1..16)) {
            let encoder = letters();
            let m = encoder.encode_nested(&words).expect("encode");

            prop_assert_eq!(m.n_rows(), words.len());
            prop_assert!(m.rows().iter().all(|r| r.dimensions() == 6));

            for (word, row) in words.iter().zip(m.rows()) {
                let mut on_oov_slot: Vec<&str> = word
                    .iter()
                    .map(String::as_str)
                    .filter(|t| encoder.term_index().index_of(t) == OOV_INDEX)
                    .collect();
                on_oov_slot.sort_unstable();
                on_oov_slot.dedup();
                if on_oov_slot.len() > 1 {
                    // distinct terms share slot 0, rows keep only one count
                    continue;
                }

                if word.is_empty() {
                    prop_assert_eq!(row.nnz(), 0);
                } else {
                    prop_assert_eq!(row, &encoder.encode_flat(word).expect("encode"));
                }
            }
        }
    }
}
