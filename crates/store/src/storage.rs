//! Typed access to the board's persisted entries.


use stickies_primitives::{ColorSource, NoteRecord};

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::notes::{self, NOTES_KEY};
use crate::theme::{self, DARK_MODE_KEY};

/// Board persistence over a [`KeyValueStore`] backend.
#[derive(Debug, Default)]
pub struct Storage<B> {
	backend: B,
}

impl<B: KeyValueStore> Storage<B> {
	pub fn new(backend: B) -> Self {
		Self { backend }
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn into_backend(self) -> B {
		self.backend
	}

	/// Loads the persisted note list.
	///
	/// A missing or empty entry yields an empty list and leaves the backend
	/// untouched. A malformed entry is removed and also yields an empty list.
	/// Records without a usable color get one from `colors`; that choice is
	/// not written back here.
	pub fn load_notes(&mut self, colors: &mut dyn ColorSource) -> Vec<NoteRecord> {
		let Some(raw) = self.backend.get(NOTES_KEY).filter(|raw| !raw.is_empty()) else {
			return Vec::new();
		};

		match notes::decode(&raw, colors) {
			Ok(notes) => {
				tracing::debug!(count = notes.len(), "Loaded notes");
				notes
			}
			Err(error) => {
				tracing::warn!(%error, "Discarding malformed notes entry");
				if let Err(error) = self.backend.remove(NOTES_KEY) {
					tracing::warn!(%error, "Failed to clear malformed notes entry");
				}
				Vec::new()
			}
		}
	}

	/// Overwrites the persisted note list with `notes`.
	pub fn save_notes(&mut self, notes: &[NoteRecord]) -> Result<()> {
		let blob = notes::encode(notes)?;
		self.backend.set(NOTES_KEY, blob)?;
		tracing::debug!(count = notes.len(), "Saved notes");
		Ok(())
	}

	/// Loads the theme flag; `false` unless the stored value is `"true"`.
	pub fn load_dark_mode(&self) -> bool {
		theme::decode(self.backend.get(DARK_MODE_KEY).as_deref())
	}

	/// Persists the theme flag.
	pub fn save_dark_mode(&mut self, dark: bool) -> Result<()> {
		self.backend.set(DARK_MODE_KEY, theme::encode(dark))
	}
}
