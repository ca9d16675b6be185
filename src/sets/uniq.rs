//! Deduplication of sorted sequences

/// Drop consecutive duplicates from an ascending sequence, like Unix `uniq`.
///
/// ```
/// assert_eq!(sparsekit::uniq(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: Ord + Copy>(sorted: &[T]) -> Vec<T> {
	debug_assert!(super::is_ascending(sorted), "uniq: input is not ascending");

	let mut out = Vec::with_capacity(sorted.len());
	for &value in sorted {
		if out.last() != Some(&value) {
			out.push(value);
		}
	}
	out
}
