//! Merge algorithms over ascending integer sequences
//!
//! Inputs are expected in ascending order (and duplicate-free for
//! `intersect`/`union`). Ordering is asserted in debug builds only.

pub mod merge;
pub mod uniq;

pub use merge::{intersect, intersect_into, union, union_into};
pub use uniq::uniq;

/// True when every element is >= its predecessor
pub fn is_ascending<T: Ord>(values: &[T]) -> bool {
	values.windows(2).all(|w| w[0] <= w[1])
}

/// True when every element is > its predecessor
pub fn is_strictly_ascending<T: Ord>(values: &[T]) -> bool {
	values.windows(2).all(|w| w[0] < w[1])
}
