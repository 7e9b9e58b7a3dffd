//! Codec for the persisted notes blob.
//!
//! The blob is a JSON array of `{"text": ..., "color": ...}` objects. Decoding
//! is lenient per entry:
//!
//! - `text` keeps strings as they are. `true` and non-zero numbers read as
//!   their JSON spelling; anything else, or no `text` at all, is an empty note.
//! - A missing or unrecognized `color` is drawn from the [`ColorSource`]. That
//!   substitute is only written back by the next save.
//! - An entry that is not an object (`"b"`, `3`, `[]`) has no fields, so it
//!   loads as an empty note with a drawn color.
//!
//! A blob that is not an array, or that holds a `null` entry, is rejected as a
//! whole.


use serde_json::Value;
use stickies_primitives::{ColorSource, NoteColor, NoteRecord};

use crate::error::{BlobError, StoreError};

/// Key holding the notes blob.
pub const NOTES_KEY: &str = "notes";

/// Decodes a notes blob.
pub fn decode(raw: &str, colors: &mut dyn ColorSource) -> Result<Vec<NoteRecord>, BlobError> {
	let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
		return Err(BlobError::NotAnArray);
	};

	items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			if item.is_null() {
				return Err(BlobError::NullEntry { index });
			}
			let text = item.get("text").map(text_of).unwrap_or_default();
			let color = item
				.get("color")
				.and_then(Value::as_str)
				.and_then(NoteColor::from_name)
				.unwrap_or_else(|| colors.next_color());
			Ok(NoteRecord::new(text, color))
		})
		.collect()
}

fn text_of(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Bool(true) => "true".to_string(),
		Value::Number(number) if number.as_f64() != Some(0.0) => number.to_string(),
		_ => String::new(),
	}
}

/// Encodes the full note list.
pub fn encode(notes: &[NoteRecord]) -> Result<String, StoreError> {
	serde_json::to_string(notes).map_err(|error| StoreError::Encode {
		key: NOTES_KEY,
		error,
	})
}
