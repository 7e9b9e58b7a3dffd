//! Light/dark theme switch.

/// Resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

/// The theme toggle control.
///
/// Presentational only; persisted independently of notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSwitch {
	dark: bool,
}

impl ThemeSwitch {
	pub fn new(dark: bool) -> Self {
		Self { dark }
	}

	pub fn is_dark(&self) -> bool {
		self.dark
	}

	pub fn mode(&self) -> ThemeMode {
		if self.dark { ThemeMode::Dark } else { ThemeMode::Light }
	}

	/// Applies a loaded value.
	pub fn apply(&mut self, dark: bool) {
		self.dark = dark;
	}

	/// Flips the theme and returns the new flag.
	pub fn toggle(&mut self) -> bool {
		self.dark = !self.dark;
		self.dark
	}

	/// Control label: names the mode a press switches to.
	pub fn label(&self) -> &'static str {
		if self.dark { "Light mode" } else { "Dark mode" }
	}

	/// Pressed state of the control.
	pub fn pressed(&self) -> bool {
		self.dark
	}
}
