//! Error types for sparsekit

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
