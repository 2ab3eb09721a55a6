//! Similarity metrics for word-hashing vectors.
//!
//! DSSM-style matching scores a query against a document by comparing
//! their word-hashing vectors. Both vectors must come from the same term
//! index; a width mismatch is reported instead of silently truncating.

use crate::error::{Result, WordHashingError};
use crate::vector::HashingVector;

/// Available similarity metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Cosine similarity (scale-invariant, in [0, 1] for counts)
    Cosine,
    /// Dot product (raw inner product)
    Dot,
    /// Euclidean distance (converted to similarity)
    Euclidean,
}

/// Similarity computation for hashing vectors.
pub struct Similarity;

impl Similarity {
    /// Compute similarity using the specified metric.
    pub fn compute(a: &HashingVector, b: &HashingVector, metric: Metric) -> Result<f64> {
        match metric {
            Metric::Cosine => Self::cosine(a, b),
            Metric::Dot => Self::dot(a, b),
            Metric::Euclidean => Self::euclidean(a, b),
        }
    }

    /// Cosine similarity: dot(a, b) / (||a|| * ||b||)
    ///
    /// Zero vectors (documents with no n-grams) have similarity 0 to
    /// everything.
    pub fn cosine(a: &HashingVector, b: &HashingVector) -> Result<f64> {
        let dot = Self::dot(a, b)?;
        let norm_a = a.norm();
        let norm_b = b.norm();

        if norm_a < 1e-10 || norm_b < 1e-10 {
            return Ok(0.0);
        }

        Ok(dot / (norm_a * norm_b))
    }

    /// Raw dot product.
    pub fn dot(a: &HashingVector, b: &HashingVector) -> Result<f64> {
        check_dimensions(a, b)?;
        Ok(a.data().iter().zip(b.data()).map(|(x, y)| x * y).sum())
    }

    /// Euclidean distance (converted to similarity).
    ///
    /// Returns 1 / (1 + distance) so higher values mean more similar.
    pub fn euclidean(a: &HashingVector, b: &HashingVector) -> Result<f64> {
        check_dimensions(a, b)?;
        let distance = a
            .data()
            .iter()
            .zip(b.data())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt();
        Ok(1.0 / (1.0 + distance))
    }
}

fn check_dimensions(a: &HashingVector, b: &HashingVector) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(WordHashingError::DimensionMismatch {
            expected: a.dimensions(),
            got: b.dimensions(),
        });
    }
    Ok(())
}
