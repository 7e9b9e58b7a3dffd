//! Terminal colors for both themes.

use crossterm::style::Color;
use stickies_primitives::NoteColor;
use stickies_view::ThemeMode;

/// Screen colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub muted: Color,
	pub accent: Color,
	/// Text drawn on top of a note.
	pub note_fg: Color,
}

pub fn ui(mode: ThemeMode) -> UiColors {
	match mode {
		ThemeMode::Light => UiColors {
			bg: Color::Rgb { r: 245, g: 245, b: 240 },
			fg: Color::Rgb { r: 34, g: 34, b: 34 },
			muted: Color::Rgb { r: 140, g: 140, b: 140 },
			accent: Color::Rgb { r: 40, g: 90, b: 200 },
			note_fg: Color::Rgb { r: 34, g: 34, b: 34 },
		},
		ThemeMode::Dark => UiColors {
			bg: Color::Rgb { r: 24, g: 24, b: 28 },
			fg: Color::Rgb { r: 230, g: 230, b: 230 },
			muted: Color::Rgb { r: 120, g: 120, b: 130 },
			accent: Color::Rgb { r: 120, g: 170, b: 255 },
			note_fg: Color::Rgb { r: 240, g: 240, b: 240 },
		},
	}
}

/// Background of a note cell.
pub fn note(color: NoteColor, mode: ThemeMode) -> Color {
	let (r, g, b) = match (mode, color) {
		(ThemeMode::Light, NoteColor::Yellow) => (255, 244, 168),
		(ThemeMode::Light, NoteColor::Blue) => (187, 222, 251),
		(ThemeMode::Light, NoteColor::Pink) => (248, 187, 208),
		(ThemeMode::Light, NoteColor::Green) => (200, 230, 201),
		(ThemeMode::Light, NoteColor::Lilac) => (225, 190, 231),
		(ThemeMode::Dark, NoteColor::Yellow) => (122, 108, 30),
		(ThemeMode::Dark, NoteColor::Blue) => (33, 82, 128),
		(ThemeMode::Dark, NoteColor::Pink) => (128, 42, 78),
		(ThemeMode::Dark, NoteColor::Green) => (40, 100, 52),
		(ThemeMode::Dark, NoteColor::Lilac) => (90, 56, 118),
	};
	Color::Rgb { r, g, b }
}
