//! Term hashing into sparse vector positions

use std::str::FromStr;
use xxhash_rust::xxh3::xxh3_64;

use super::order::ById;
use super::vector::{Element, SparseVector};
use crate::config::{HASH_MULTIPLIER, HASH_SEED};

/// Polynomial string hash (`h = 31 * h + byte`, 64-bit wrapping).
///
/// Reading the result as `i64` reproduces the classic signed variant.
pub fn hash_term(term: &str) -> u64 {
	term.bytes().fold(HASH_SEED, |h, byte| {
		h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(byte))
	})
}

/// Strategy for mapping a term to a vector id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermHasher {
	#[default]
	Polynomial,
	Xxh3,
}

impl TermHasher {
	pub fn hash(&self, term: &str) -> u64 {
		match self {
			TermHasher::Polynomial => hash_term(term),
			TermHasher::Xxh3 => xxh3_64(term.as_bytes()),
		}
	}
}

impl FromStr for TermHasher {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"polynomial" | "poly" => Ok(TermHasher::Polynomial),
			"xxh3" => Ok(TermHasher::Xxh3),
			other => Err(format!("unknown term hasher '{}'", other)),
		}
	}
}

impl SparseVector {
	/// Build a vector from weighted terms, sorted by id.
	///
	/// Terms that hash to the same id have their weights summed, so the
	/// result is always valid input for `dot`.
	pub fn from_weighted_terms<I, S>(terms: I, hasher: TermHasher) -> Self
	where
		I: IntoIterator<Item = (S, f64)>,
		S: AsRef<str>,
	{
		let mut v: SparseVector = terms
			.into_iter()
			.map(|(term, weight)| Element::new(hasher.hash(term.as_ref()), weight))
			.collect();
		v.sort_by_order(ById);

		let elements = v.elements_mut();
		let before = elements.len();
		elements.dedup_by(|next, kept| {
			if next.id == kept.id {
				kept.value += next.value;
				true
			} else {
				false
			}
		});

		let merged = before - elements.len();
		if merged > 0 {
			crate::ui::debug(&format!("Merged {} colliding term ids", merged));
		}

		v
	}

	/// Same as `from_weighted_terms` with the configured hasher
	pub fn from_terms<I, S>(terms: I) -> Self
	where
		I: IntoIterator<Item = (S, f64)>,
		S: AsRef<str>,
	{
		Self::from_weighted_terms(terms, crate::config::term_hasher())
	}
}
