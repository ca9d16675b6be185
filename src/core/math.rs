//! Numeric reductions over sparse vectors

use std::cmp::Ordering;

use super::vector::SparseVector;
use crate::error::{Error, Result};

/// Dot product of two sparse vectors.
///
/// Both vectors must be sorted strictly ascending by id. This is only
/// checked in debug builds; release builds return a deterministic but
/// meaningless sum for unsorted input.
///
/// ```
/// use sparsekit::{dot, SparseVector};
///
/// let v1 = SparseVector::from(vec![(0, 4.0), (2, 2.0)]);
/// let v2 = SparseVector::from(vec![(0, 5.0), (1, 3.0), (2, 7.0), (3, 6.0)]);
/// assert_eq!(dot(&v1, &v2), 34.0);
/// ```
pub fn dot(v1: &SparseVector, v2: &SparseVector) -> f64 {
	scaled_dot(v1, v2, 1.0, 1.0)
}

/// Merge-join dot product with each side divided by its own scale
fn scaled_dot(v1: &SparseVector, v2: &SparseVector, s1: f64, s2: f64) -> f64 {
	debug_assert!(v1.is_sorted_by_id(), "dot: v1 is not sorted by id");
	debug_assert!(v2.is_sorted_by_id(), "dot: v2 is not sorted by id");

	let (a, b) = (v1.as_slice(), v2.as_slice());
	let (mut i, mut j) = (0, 0);
	let mut sum = 0.0;

	while i < a.len() && j < b.len() {
		match a[i].id.cmp(&b[j].id) {
			Ordering::Less => i += 1,
			Ordering::Greater => j += 1,
			Ordering::Equal => {
				sum += (a[i].value / s1) * (b[j].value / s2);
				i += 1;
				j += 1;
			}
		}
	}

	sum
}

/// Euclidean (L2) norm. Element order does not matter.
pub fn norm(v: &SparseVector) -> f64 {
	scaled_norm(v, 1.0)
}

fn scaled_norm(v: &SparseVector, scale: f64) -> f64 {
	v.iter()
		.map(|e| {
			let x = e.value / scale;
			x * x
		})
		.sum::<f64>()
		.sqrt()
}

/// Largest absolute value, or NaN if any value is NaN
fn max_abs(v: &SparseVector) -> f64 {
	v.iter().fold(0.0_f64, |m, e| {
		if m.is_nan() || e.value.is_nan() {
			f64::NAN
		} else {
			m.max(e.value.abs())
		}
	})
}

/// Cosine similarity, or 0.0 when either vector has zero norm.
///
/// Each vector is scaled by its largest magnitude first, so large finite
/// values do not overflow. NaN values propagate to the result.
pub fn cosine(v1: &SparseVector, v2: &SparseVector) -> f64 {
	let (s1, s2) = (max_abs(v1), max_abs(v2));
	if s1.is_nan() || s2.is_nan() {
		return f64::NAN;
	}
	if s1 == 0.0 || s2 == 0.0 {
		return 0.0;
	}

	scaled_dot(v1, v2, s1, s2) / scaled_norm(v1, s1) / scaled_norm(v2, s2)
}

/// Weighted mean of `values` with the matching `weights`.
///
/// Weights are expected to be non-negative. A zero weight sum is not an
/// error: the result is NaN or infinite per IEEE-754.
///
/// # Errors
/// `Error::InvalidArgument` if the slices differ in length.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
	if values.len() != weights.len() {
		return Err(Error::InvalidArgument(format!(
			"weighted_mean: {} values but {} weights",
			values.len(),
			weights.len()
		)));
	}

	let (weighted_sum, weight_sum) = values
		.iter()
		.zip(weights)
		.fold((0.0_f64, 0.0_f64), |(weighted, total), (x, w)| (weighted + x * w, total + w));

	Ok(weighted_sum / weight_sum)
}
