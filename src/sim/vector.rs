//! Element-wise helpers for fixed-length numeric tuples
//!
//! Integer scaling truncates toward zero, so `-7 * 0.5` becomes `-3` and
//! `7 * 0.5` becomes `3`. Float scaling is exact.

use std::ops::Add;

use crate::error::VectorError;

/// A numeric element that can be summed and scaled by a real factor
pub trait Scalar: Copy + Default + Add<Output = Self> {
    /// Multiply by `factor`, converting back to `Self`
    fn scale(self, factor: f64) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn scale(self, factor: f64) -> Self {
                // `as` truncates toward zero (and saturates on overflow)
                (self as f64 * factor) as $t
            }
        }
    )*};
}

impl_scalar_int!(i32, i64);

impl Scalar for f32 {
    #[inline]
    fn scale(self, factor: f64) -> Self {
        (self as f64 * factor) as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

/// Add the elements of several equal-length tuples together
///
/// Empty tuples are fine as long as every operand is empty.
pub fn add_tuples<T: Scalar>(tuples: &[&[T]]) -> Result<Vec<T>, VectorError> {
    let first = tuples.first().ok_or(VectorError::EmptyInput)?;
    let mut sum = vec![T::default(); first.len()];

    for tuple in tuples {
        if tuple.len() != sum.len() {
            return Err(VectorError::ArityMismatch {
                expected: sum.len(),
                found: tuple.len(),
            });
        }
        for (acc, &val) in sum.iter_mut().zip(tuple.iter()) {
            *acc = *acc + val;
        }
    }

    Ok(sum)
}

/// Scale every element of a tuple by `factor`
pub fn scale_tuple<T: Scalar>(tuple: &[T], factor: f64) -> Vec<T> {
    tuple.iter().map(|&val| val.scale(factor)).collect()
}
