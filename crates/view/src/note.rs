//! A single note as shown on the board.

use stickies_primitives::{NoteColor, NoteId, NoteRecord};

/// Glyph of the delete affordance.
pub const DELETE_GLYPH: &str = "×";

/// Accessible label of the delete affordance.
pub const DELETE_LABEL: &str = "Delete note";

/// Per-note UI mode. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteMode {
	#[default]
	Display,
	/// Raw text exposed for modification. `draft` has input focus.
	Editing { draft: String },
}

/// What the renderer draws for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteElement<'a> {
	/// Delete affordance plus content.
	Display { delete: &'static str, content: &'a str },
	/// Only the edit field.
	Editing { draft: &'a str },
}

/// A note on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
	id: NoteId,
	text: String,
	color: NoteColor,
	mode: NoteMode,
}

impl NoteView {
	pub(crate) fn new(id: NoteId, text: String, color: NoteColor) -> Self {
		Self {
			id,
			text,
			color,
			mode: NoteMode::Display,
		}
	}

	pub fn id(&self) -> NoteId {
		self.id
	}

	/// Last committed text. While editing this is the pre-edit text.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn color(&self) -> NoteColor {
		self.color
	}

	pub fn mode(&self) -> &NoteMode {
		&self.mode
	}

	pub fn is_editing(&self) -> bool {
		matches!(self.mode, NoteMode::Editing { .. })
	}

	/// Current draft, if editing.
	pub fn draft(&self) -> Option<&str> {
		match &self.mode {
			NoteMode::Editing { draft } => Some(draft),
			NoteMode::Display => None,
		}
	}

	pub(crate) fn draft_mut(&mut self) -> Option<&mut String> {
		match &mut self.mode {
			NoteMode::Editing { draft } => Some(draft),
			NoteMode::Display => None,
		}
	}

	/// Enters editing with the raw text as the draft.
	pub(crate) fn begin_edit(&mut self) {
		self.mode = NoteMode::Editing {
			draft: self.text.clone(),
		};
	}

	/// Leaves editing and rebuilds the element around `text`.
	pub(crate) fn rebuild(&mut self, text: String) {
		self.text = text;
		self.mode = NoteMode::Display;
	}

	pub fn element(&self) -> NoteElement<'_> {
		match &self.mode {
			NoteMode::Display => NoteElement::Display {
				delete: DELETE_GLYPH,
				content: &self.text,
			},
			NoteMode::Editing { draft } => NoteElement::Editing { draft },
		}
	}

	/// Persisted form: committed text and color.
	pub fn record(&self) -> NoteRecord {
		NoteRecord::new(self.text.clone(), self.color)
	}
}
