//! # Sparsekit Library
//!
//! Sparse vector arithmetic (dot product, norm, weighted mean) and
//! merge-based set operations over ascending integer sequences.

pub mod config;
pub mod core;
pub mod error;
pub mod sets;
pub mod ui;

pub use crate::core::{
	cosine, dot, hash_term, norm, weighted_mean, ById, ByValueDesc, Element, ElementOrder,
	SparseVector, TermHasher,
};
pub use error::{Error, Result};
pub use sets::{intersect, intersect_into, uniq, union, union_into};
