//! Single-file JSON backend.
//!
//! All entries live in one JSON object of string values. The file is read once
//! when opened; every [`set`](KeyValueStore::set) and
//! [`remove`](KeyValueStore::remove) rewrites it through a temporary file in
//! the same directory that is then renamed into place.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Key-value store backed by a JSON file.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl FileStore {
	/// Opens the store at `path`.
	///
	/// A missing file is an empty store and is not created until the first
	/// write. A file that does not hold a JSON object of strings is logged and
	/// replaced by an empty store. Other read failures are returned.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let entries = match std::fs::read_to_string(&path) {
			Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
				Ok(entries) => entries,
				Err(error) => {
					tracing::warn!(path = %path.display(), %error, "Discarding unreadable store file");
					BTreeMap::new()
				}
			},
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
			Err(error) => return Err(StoreError::Io { path, error }),
		};

		tracing::debug!(path = %path.display(), entries = entries.len(), "Opened store file");
		Ok(Self { path, entries })
	}

	/// Path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self) -> Result<()> {
		let io_err = |error| StoreError::Io {
			path: self.path.clone(),
			error,
		};

		let dir = match self.path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		std::fs::create_dir_all(dir).map_err(io_err)?;

		let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
		{
			let mut writer = BufWriter::new(tmp.as_file_mut());
			serde_json::to_writer_pretty(&mut writer, &self.entries).map_err(|error| {
				StoreError::Io {
					path: self.path.clone(),
					error: error.into(),
				}
			})?;
			writer.flush().map_err(io_err)?;
		}
		tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
		Ok(())
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) -> Result<()> {
		self.entries.insert(key.to_string(), value);
		self.flush()
	}

	fn remove(&mut self, key: &str) -> Result<()> {
		if self.entries.remove(key).is_some() {
			self.flush()?;
		}
		Ok(())
	}
}
