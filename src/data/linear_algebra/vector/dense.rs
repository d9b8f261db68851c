//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size. Used for rank vectors.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{Float, NumCast};

use crate::data::linear_algebra::error::{LinearAlgebraError, try_with_capacity};
use crate::data::number_types::float::format::significant;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F> Dense<F> {
    /// Create a `DenseVector` from the provided data.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Return value
    ///
    /// A constant `DenseVector`.
    pub fn constant(value: F, len: usize) -> Self
    where
        F: Clone,
    {
        Self { data: vec![value; len] }
    }

    /// Retrieve the value at an index, if it is in range.
    pub fn get(&self, i: usize) -> Option<&F> {
        self.data.get(i)
    }

    /// Set the value at index `i` to `value`.
    pub fn set(&mut self, i: usize, value: F) {
        debug_assert!(i < self.len());

        self.data[i] = value;
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values of this vector.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// The length of this vector, the `dim` of the textual format.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the values as a slice.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// Overwrite all values with those of a buffer of the same length.
    ///
    /// Used to commit a newly computed state that was built next to this one.
    pub fn copy_from_slice(&mut self, values: &[F])
    where
        F: Copy,
    {
        debug_assert_eq!(values.len(), self.len());

        self.data.copy_from_slice(values);
    }

    /// Get the data of this vector.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }
}

impl<F: Float> Dense<F> {
    /// Create a vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Create a vector of zeros, reporting a failed allocation rather than aborting.
    ///
    /// Use this when `len` comes from outside of the program, such as a file header.
    pub fn try_zeros(len: usize) -> Result<Self, LinearAlgebraError> {
        let mut data = try_with_capacity(len)?;
        data.resize(len, F::zero());

        Ok(Self { data })
    }

    /// The uniform probability distribution over `len` nodes.
    ///
    /// # Errors
    ///
    /// There is no distribution over zero nodes.
    pub fn uniform(len: usize) -> Result<Self, LinearAlgebraError> {
        if len == 0 {
            return Err(LinearAlgebraError::DivideByZero("uniform vector"));
        }
        let value = F::one() / cast(len);

        Ok(Self::constant(value, len))
    }

    /// Total mass of this vector, the sum of its values.
    pub fn sum(&self) -> F {
        self.data.iter().fold(F::zero(), |total, &value| total + value)
    }
}

/// Convert a count to the floating point type.
///
/// Every `usize` has a (possibly rounded) floating point representation.
pub(crate) fn cast<F: Float>(count: usize) -> F {
    <F as NumCast>::from(count).unwrap_or_else(F::infinity)
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<F> FromIterator<F> for Dense<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<'a, F> IntoIterator for &'a Dense<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Writes `Vector: <dim>` followed by a line of values to five significant digits.
impl<F: Float> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Vector: {}", self.len())?;
        for &value in &self.data {
            write!(f, "{} ", significant(value, 5))?;
        }
        writeln!(f)
    }
}
