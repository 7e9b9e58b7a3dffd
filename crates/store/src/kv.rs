//! The key-value persistence port.

use std::collections::BTreeMap;

use crate::error::Result;

/// Flat string-to-string persistence.
///
/// Reads are served from memory and cannot fail. Writes may hit a backing
/// medium and report failures to the caller.
pub trait KeyValueStore {
	/// Returns the value stored under `key`.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&mut self, key: &str, value: String) -> Result<()>;

	/// Removes `key`. Removing an absent key is not an error.
	fn remove(&mut self, key: &str) -> Result<()>;
}

impl<B: KeyValueStore + ?Sized> KeyValueStore for Box<B> {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: String) -> Result<()> {
		(**self).set(key, value)
	}

	fn remove(&mut self, key: &str) -> Result<()> {
		(**self).remove(key)
	}
}

/// In-process backend. Nothing outlives the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: BTreeMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns whether `key` is present.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) -> Result<()> {
		self.entries.insert(key.to_string(), value);
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<()> {
		self.entries.remove(key);
		Ok(())
	}
}
