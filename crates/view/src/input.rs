//! The new-note input field.

/// Text field plus the enablement of the add control it drives.
///
/// The add control is enabled exactly when the trimmed value is non-empty.
/// This mirror never touches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
	value: String,
	add_enabled: bool,
}

impl InputField {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Trimmed value, as it would be added.
	pub fn trimmed(&self) -> &str {
		trim_blank(&self.value)
	}

	pub fn add_enabled(&self) -> bool {
		self.add_enabled
	}

	/// Replaces the whole value.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
		self.refresh();
	}

	pub fn insert_char(&mut self, ch: char) {
		self.value.push(ch);
		self.refresh();
	}

	pub fn backspace(&mut self) {
		self.value.pop();
		self.refresh();
	}

	pub fn clear(&mut self) {
		self.value.clear();
		self.refresh();
	}

	/// Recomputes enablement from the current value.
	pub fn refresh(&mut self) {
		self.add_enabled = !self.trimmed().is_empty();
	}
}

/// Strips leading and trailing blanks the way the note text fields do.
///
/// Unicode whitespace plus the byte order mark, minus NEL (U+0085).
pub fn trim_blank(text: &str) -> &str {
	text.trim_matches(is_blank)
}

fn is_blank(ch: char) -> bool {
	(ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn enablement_follows_trimmed_value() {
		let mut input = InputField::new();
		assert!(!input.add_enabled());

		input.insert_char(' ');
		assert!(!input.add_enabled());

		input.insert_char('x');
		assert!(input.add_enabled());
		assert_eq!(input.trimmed(), "x");

		input.backspace();
		assert!(!input.add_enabled());

		input.set_value("\t hello \n");
		assert!(input.add_enabled());
		assert_eq!(input.trimmed(), "hello");

		input.clear();
		assert_eq!(input.value(), "");
		assert!(!input.add_enabled());
	}

	#[test]
	fn byte_order_mark_counts_as_blank() {
		let mut input = InputField::new();
		input.set_value("\u{FEFF}");
		assert!(!input.add_enabled());

		input.set_value("\u{FEFF}\u{A0} note \u{2028}");
		assert_eq!(input.trimmed(), "note");
	}

	#[test]
	fn next_line_is_kept() {
		assert_eq!(trim_blank("\u{85}x\u{85}"), "\u{85}x\u{85}");
		assert_eq!(trim_blank(" \t\r\n"), "");
	}
}
