//! Output types for word hashing.
//!
//! Counts are stored as `f64` so they can be fed straight into a model's
//! input layer, but every cell is integral and non-negative.

use crate::error::{Result, WordHashingError};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A dense count vector with one slot per term plus the OOV slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashingVector {
    data: Vec<f64>,
}

impl HashingVector {
    /// Create a new zero vector of given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            data: vec![0.0; dimensions],
        }
    }

    /// Create a vector from raw counts.
    pub fn from_data(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the vector, returning the plain sequence of counts.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Add `count` occurrences at `index`.
    pub(crate) fn add(&mut self, index: usize, count: usize) {
        self.data[index] += count as f64;
    }

    /// Overwrite the cell at `index` with `count`.
    pub(crate) fn set(&mut self, index: usize, count: usize) {
        self.data[index] = count as f64;
    }

    /// Sum of all counts.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Count non-zero elements.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Compute the L2 norm.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Sparse view: `(index, count)` for every non-zero cell, ascending.
    pub fn to_sparse(&self) -> Vec<(usize, f64)> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v))
            .collect()
    }
}

impl Index<usize> for HashingVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl From<HashingVector> for Vec<f64> {
    fn from(vector: HashingVector) -> Self {
        vector.data
    }
}

/// One [`HashingVector`] row per word.
///
/// Serializes as a plain list of rows. Deserializing checks that every row
/// has the width of the first; an empty list gives a `0 × 0` matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HashingVector>", into = "Vec<HashingVector>")]
pub struct HashingMatrix {
    dimensions: usize,
    rows: Vec<HashingVector>,
}

impl HashingMatrix {
    /// Create a zero matrix of `n_rows` × `dimensions`.
    pub fn zeros(n_rows: usize, dimensions: usize) -> Self {
        Self {
            dimensions,
            rows: vec![HashingVector::zeros(dimensions); n_rows],
        }
    }

    /// Build a matrix from rows, checking every row has `dimensions` cells.
    pub fn from_rows(dimensions: usize, rows: Vec<HashingVector>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|r| r.dimensions() != dimensions) {
            return Err(WordHashingError::DimensionMismatch {
                expected: dimensions,
                got: row.dimensions(),
            });
        }
        Ok(Self { dimensions, rows })
    }

    /// Number of rows (words).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row width.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// `(n_rows, dimensions)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.dimensions)
    }

    /// Get one row.
    pub fn row(&self, index: usize) -> Option<&HashingVector> {
        self.rows.get(index)
    }

    /// All rows in word order.
    pub fn rows(&self) -> &[HashingVector] {
        &self.rows
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut HashingVector {
        &mut self.rows[index]
    }

    /// Consume the matrix, returning rows of plain counts.
    pub fn into_vecs(self) -> Vec<Vec<f64>> {
        self.rows.into_iter().map(HashingVector::into_vec).collect()
    }
}

impl TryFrom<Vec<HashingVector>> for HashingMatrix {
    type Error = WordHashingError;

    fn try_from(rows: Vec<HashingVector>) -> Result<Self> {
        let dimensions = rows.first().map_or(0, HashingVector::dimensions);
        Self::from_rows(dimensions, rows)
    }
}

impl From<HashingMatrix> for Vec<HashingVector> {
    fn from(matrix: HashingMatrix) -> Self {
        matrix.rows
    }
}

impl Index<usize> for HashingMatrix {
    type Output = HashingVector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

/// Result of encoding either input shape.
///
/// Serializes without a tag: a vector as a list of counts, a matrix as a
/// list of rows. An empty list reads back as an empty vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hashing {
    /// One vector for a flat n-gram list
    Vector(HashingVector),
    /// One row per word for nested n-gram groups
    Matrix(HashingMatrix),
}

impl Hashing {
    /// Width of the vector or of each matrix row.
    pub fn dimensions(&self) -> usize {
        match self {
            Hashing::Vector(v) => v.dimensions(),
            Hashing::Matrix(m) => m.dimensions(),
        }
    }

    /// The vector, if this came from flat input.
    pub fn as_vector(&self) -> Option<&HashingVector> {
        match self {
            Hashing::Vector(v) => Some(v),
            Hashing::Matrix(_) => None,
        }
    }

    /// The matrix, if this came from nested input.
    pub fn as_matrix(&self) -> Option<&HashingMatrix> {
        match self {
            Hashing::Vector(_) => None,
            Hashing::Matrix(m) => Some(m),
        }
    }
}
