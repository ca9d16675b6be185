//! Comparator strategies for reordering sparse vectors

use std::cmp::Ordering;

use super::vector::Element;

/// Ordering capability over elements, passed to `SparseVector::sort_by_order`.
pub trait ElementOrder {
	fn compare(&self, a: &Element, b: &Element) -> Ordering;
}

/// Ascending by id
#[derive(Debug, Clone, Copy, Default)]
pub struct ById;

impl ElementOrder for ById {
	fn compare(&self, a: &Element, b: &Element) -> Ordering {
		a.id.cmp(&b.id)
	}
}

/// Descending by value. NaN sorts by IEEE total order; ties are unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValueDesc;

impl ElementOrder for ByValueDesc {
	fn compare(&self, a: &Element, b: &Element) -> Ordering {
		b.value.total_cmp(&a.value)
	}
}

impl<F> ElementOrder for F
where
	F: Fn(&Element, &Element) -> Ordering,
{
	fn compare(&self, a: &Element, b: &Element) -> Ordering {
		self(a, b)
	}
}
