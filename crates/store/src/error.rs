//! Error types for persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a backend while writing or opening.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the backing file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value could not be encoded as JSON.
	#[error("failed to encode '{key}': {error}")]
	Encode {
		/// Key whose value failed to encode.
		key: &'static str,
		/// The underlying serializer error.
		error: serde_json::Error,
	},
}

/// Reasons a persisted notes blob is rejected.
#[derive(Debug, Error)]
pub enum BlobError {
	/// Not JSON at all.
	#[error("notes blob is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// Valid JSON, but not an array.
	#[error("notes blob is not an array")]
	NotAnArray,

	/// A `null` array element.
	#[error("notes blob entry {index} is null")]
	NullEntry {
		/// Position of the offending entry.
		index: usize,
	},
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
