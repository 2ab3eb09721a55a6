//! Preprocessing units.
//!
//! A preprocessing pipeline is a chain of units, each turning the previous
//! unit's output into its own (n-gram extraction, vocabulary lookup, word
//! hashing, ...). [`WordHashing`] is the last step before the model input.

use crate::encoder::WordHashing;
use crate::error::Result;
use crate::tokens::TokenInput;
use crate::vector::Hashing;

/// A stateless transformation step in a preprocessing pipeline.
pub trait Unit {
    /// What the unit consumes.
    type Input: ?Sized;
    /// What the unit produces.
    type Output;

    /// Transform one input.
    fn transform(&self, input: &Self::Input) -> Result<Self::Output>;

    /// Transform a batch of inputs, stopping at the first failure.
    fn transform_all<'a, I>(&self, inputs: I) -> Result<Vec<Self::Output>>
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        inputs.into_iter().map(|input| self.transform(input)).collect()
    }
}

impl Unit for WordHashing {
    type Input = TokenInput;
    type Output = Hashing;

    fn transform(&self, input: &TokenInput) -> Result<Hashing> {
        self.encode(input)
    }
}
