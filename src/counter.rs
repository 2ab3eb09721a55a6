//! Term Counter: Frequency-preserving multiset of terms.
//!
//! Word hashing only cares how often each n-gram occurs, never where.
//! The counter collapses a token stream into `(term, count)` pairs.
//!
//! # Ordering
//!
//! Distinct terms are reported in first-seen order. Counts never depend on
//! order, but the nested encoder overwrites cells, so when two distinct
//! terms land on the same index the later one in this order wins. Keeping
//! first-seen order makes that outcome reproducible run to run.

use std::collections::HashMap;

/// Counts occurrences of borrowed terms.
#[derive(Clone, Debug, Default)]
pub struct TermCounter<'a> {
    /// Distinct terms with their running counts, in first-seen order
    entries: Vec<(&'a str, usize)>,
    /// Position of each term inside `entries`
    positions: HashMap<&'a str, usize>,
    /// Number of terms added, duplicates included
    total: usize,
}

impl<'a> TermCounter<'a> {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every term of a sequence.
    pub fn from_terms<S: AsRef<str>>(terms: &'a [S]) -> Self {
        let mut counter = Self::new();
        for term in terms {
            counter.add(term.as_ref());
        }
        counter
    }

    /// Add one occurrence of a term.
    pub fn add(&mut self, term: &'a str) {
        self.total += 1;
        match self.positions.get(term) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(term, self.entries.len());
                self.entries.push((term, 1));
            }
        }
    }

    /// Occurrences of a term (0 if never added).
    pub fn count(&self, term: &str) -> usize {
        self.positions
            .get(term)
            .map_or(0, |&pos| self.entries[pos].1)
    }

    /// Number of distinct terms.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of terms added, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(term, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let terms = ["a", "b", "a", "c", "a"];
        let counter = TermCounter::from_terms(&terms);

        assert_eq!(counter.count("a"), 3);
        assert_eq!(counter.count("b"), 1);
        assert_eq!(counter.count("z"), 0);
        assert_eq!(counter.distinct(), 3);
        assert_eq!(counter.total(), 5);
    }

    #[test]
    fn test_first_seen_order() {
        let terms = vec!["est".to_string(), "#te".to_string(), "est".to_string()];
        let counter = TermCounter::from_terms(&terms);

        let pairs: Vec<_> = counter.iter().collect();
        assert_eq!(pairs, vec![("est", 2), ("#te", 1)]);
    }

    #[test]
    fn test_empty() {
        let counter = TermCounter::new();
        assert!(counter.is_empty());
        assert_eq!(counter.iter().count(), 0);

        let mut counter = TermCounter::new();
        counter.add("");
        assert!(!counter.is_empty());
        assert_eq!(counter.count(""), 1);
    }
}
