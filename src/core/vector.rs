//! Sparse vectors of (id, value) elements

use serde::{Deserialize, Serialize};

use super::order::{ById, ElementOrder};

/// One non-empty position of a sparse vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
	pub id: u64,
	pub value: f64,
}

impl Element {
	pub fn new(id: u64, value: f64) -> Self {
		Self { id, value }
	}
}

impl From<(u64, f64)> for Element {
	fn from((id, value): (u64, f64)) -> Self {
		Self { id, value }
	}
}

/// Vector that stores only its non-empty positions.
///
/// The logical vector `[9 0 0 2 0 0 0 0 7 0]` is stored as
/// `[(0, 9), (3, 2), (8, 7)]`. Dot products require the elements to be
/// sorted strictly ascending by id; which order currently holds is up to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector(Vec<Element>);

impl SparseVector {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(Vec::with_capacity(capacity))
	}

	pub fn push(&mut self, id: u64, value: f64) {
		self.0.push(Element { id, value });
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[Element] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Element> {
		self.0.iter()
	}

	pub fn into_inner(self) -> Vec<Element> {
		self.0
	}

	/// Reorder elements in place with the given strategy
	pub fn sort_by_order<O: ElementOrder>(&mut self, order: O) {
		self.0.sort_unstable_by(|a, b| order.compare(a, b));
	}

	/// True when ids are strictly ascending (the order `dot` requires)
	pub fn is_sorted_by_id(&self) -> bool {
		self.0.windows(2).all(|w| ById.compare(&w[0], &w[1]).is_lt())
	}

	pub(crate) fn elements_mut(&mut self) -> &mut Vec<Element> {
		&mut self.0
	}
}

impl From<Vec<Element>> for SparseVector {
	fn from(elements: Vec<Element>) -> Self {
		Self(elements)
	}
}

impl From<Vec<(u64, f64)>> for SparseVector {
	fn from(pairs: Vec<(u64, f64)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl<E: Into<Element>> FromIterator<E> for SparseVector {
	fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<'a> IntoIterator for &'a SparseVector {
	type Item = &'a Element;
	type IntoIter = std::slice::Iter<'a, Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for SparseVector {
	type Item = Element;
	type IntoIter = std::vec::IntoIter<Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
