//! Sparse vector types and arithmetic

pub mod hash;
pub mod math;
pub mod order;
pub mod vector;

pub use hash::{hash_term, TermHasher};
pub use math::{cosine, dot, norm, weighted_mean};
pub use order::{ById, ByValueDesc, ElementOrder};
pub use vector::{Element, SparseVector};
