//! Two-pointer intersection and union

use std::cmp::Ordering;

use super::is_strictly_ascending;

/// Intersection of two ascending, duplicate-free sequences.
///
/// ```
/// assert_eq!(sparsekit::intersect(&[1, 3, 5], &[2, 3, 4, 5]), vec![3, 5]);
/// ```
pub fn intersect<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
	let mut out = Vec::with_capacity(a.len().min(b.len()));
	intersect_into(a, b, &mut out);
	out
}

/// Intersection written into `target`, reusing its allocation.
///
/// `target` is cleared first; its previous contents never leak into the result.
pub fn intersect_into<'t, T: Ord + Copy>(a: &[T], b: &[T], target: &'t mut Vec<T>) -> &'t [T] {
	debug_assert!(is_strictly_ascending(a), "intersect: a is not strictly ascending");
	debug_assert!(is_strictly_ascending(b), "intersect: b is not strictly ascending");

	target.clear();
	let (mut i, mut j) = (0, 0);

	while i < a.len() && j < b.len() {
		match a[i].cmp(&b[j]) {
			Ordering::Less => i += 1,
			Ordering::Greater => j += 1,
			Ordering::Equal => {
				target.push(a[i]);
				i += 1;
				j += 1;
			}
		}
	}

	target
}

/// Union of two ascending, duplicate-free sequences.
///
/// ```
/// assert_eq!(sparsekit::union(&[1, 3], &[2, 3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn union<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
	let mut out = Vec::with_capacity(a.len().max(b.len()));
	union_into(a, b, &mut out);
	out
}

/// Union written into `target`, reusing its allocation.
pub fn union_into<'t, T: Ord + Copy>(a: &[T], b: &[T], target: &'t mut Vec<T>) -> &'t [T] {
	debug_assert!(is_strictly_ascending(a), "union: a is not strictly ascending");
	debug_assert!(is_strictly_ascending(b), "union: b is not strictly ascending");

	target.clear();
	let (mut i, mut j) = (0, 0);

	while i < a.len() && j < b.len() {
		match a[i].cmp(&b[j]) {
			Ordering::Less => {
				target.push(a[i]);
				i += 1;
			}
			Ordering::Greater => {
				target.push(b[j]);
				j += 1;
			}
			Ordering::Equal => {
				target.push(a[i]);
				i += 1;
				j += 1;
			}
		}
	}

	// At most one side has a remainder
	target.extend_from_slice(&a[i..]);
	target.extend_from_slice(&b[j..]);

	target
}
