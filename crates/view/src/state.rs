//! Notes in display order.

#[cfg(test)]
mod tests;

use stickies_primitives::{NoteColor, NoteId, NoteRecord};

use crate::note::NoteView;

/// The board's notes, in the order they are rendered.
///
/// Display order is serialization order: [`snapshot`](Self::snapshot) walks
/// the notes front to back. Ids are handed out in increasing order and are
/// never reused within a session.
#[derive(Debug, Clone)]
pub struct NotesState {
	notes: Vec<NoteView>,
	next_id: NoteId,
}

impl Default for NotesState {
	fn default() -> Self {
		Self {
			notes: Vec::new(),
			next_id: NoteId(1),
		}
	}
}

impl NotesState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the view from loaded records, in order.
	pub fn from_records(records: impl IntoIterator<Item = NoteRecord>) -> Self {
		let mut state = Self::new();
		for record in records {
			state.push(record.text, record.color);
		}
		state
	}

	/// Appends a note at the end of the board.
	pub fn push(&mut self, text: impl Into<String>, color: NoteColor) -> NoteId {
		let id = self.next_id;
		self.next_id = id.next();
		self.notes.push(NoteView::new(id, text.into(), color));
		id
	}

	/// Removes the note `id`, keeping the others in order.
	pub fn remove(&mut self, id: NoteId) -> Option<NoteView> {
		let index = self.position(id)?;
		Some(self.notes.remove(index))
	}

	pub fn get(&self, id: NoteId) -> Option<&NoteView> {
		self.notes.iter().find(|note| note.id() == id)
	}

	pub(crate) fn get_mut(&mut self, id: NoteId) -> Option<&mut NoteView> {
		self.notes.iter_mut().find(|note| note.id() == id)
	}

	/// Display position of `id`.
	pub fn position(&self, id: NoteId) -> Option<usize> {
		self.notes.iter().position(|note| note.id() == id)
	}

	/// Note at display position `index`.
	pub fn at(&self, index: usize) -> Option<&NoteView> {
		self.notes.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &NoteView> {
		self.notes.iter()
	}

	pub fn len(&self) -> usize {
		self.notes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.notes.is_empty()
	}

	/// The note currently in editing mode, if any.
	pub fn editing(&self) -> Option<NoteId> {
		self.notes.iter().find(|note| note.is_editing()).map(NoteView::id)
	}

	/// Persistable snapshot in display order.
	///
	/// Editing notes contribute their committed text, not the draft.
	pub fn snapshot(&self) -> Vec<NoteRecord> {
		self.notes.iter().map(NoteView::record).collect()
	}
}
