use serde::{Deserialize, Serialize};

use crate::color::NoteColor;

/// A single persisted note: its text and color tag.
///
/// Records carry no identity. Position in the persisted sequence is the only
/// thing that tells two records apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
	pub text: String,
	pub color: NoteColor,
}

impl NoteRecord {
	pub fn new(text: impl Into<String>, color: NoteColor) -> Self {
		Self {
			text: text.into(),
			color,
		}
	}
}
