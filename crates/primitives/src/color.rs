//! The fixed five-entry note palette.
//!
//! Colors serialize as their lowercase names (`"yellow"`). When parsing, the
//! `note-` prefixed class names written by older boards (`"note-yellow"`) are
//! accepted too.


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Prefix used by the legacy class-name spelling of colors.
const LEGACY_PREFIX: &str = "note-";

/// Color tag of a note.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoteColor {
	#[serde(alias = "note-yellow")]
	Yellow,
	#[serde(alias = "note-blue")]
	Blue,
	#[serde(alias = "note-pink")]
	Pink,
	#[serde(alias = "note-green")]
	Green,
	#[serde(alias = "note-lilac")]
	Lilac,
}

impl NoteColor {
	/// Number of palette entries.
	pub const PALETTE_LEN: usize = Self::COUNT;

	/// Returns the palette in declaration order.
	pub fn palette() -> impl Iterator<Item = NoteColor> {
		Self::iter()
	}

	/// Returns the palette entry at `index`, wrapping around.
	pub fn from_index(index: usize) -> Self {
		Self::iter()
			.nth(index % Self::COUNT)
			.unwrap_or(NoteColor::Yellow)
	}

	/// Lowercase name used in the persisted form.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Parses a color name, accepting both `yellow` and `note-yellow`.
	///
	/// Returns `None` for anything outside the palette.
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.strip_prefix(LEGACY_PREFIX).unwrap_or(name);
		name.parse().ok()
	}
}

impl std::fmt::Display for NoteColor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Source of colors for new notes and for loaded notes with no usable color.
pub trait ColorSource {
	/// Picks the next color.
	fn next_color(&mut self) -> NoteColor;
}

/// Uniformly random colors.
pub struct RandomColors {
	rng: StdRng,
}

impl RandomColors {
	/// Creates a source seeded from OS entropy.
	pub fn new() -> Self {
		Self {
			rng: StdRng::from_entropy(),
		}
	}

	/// Creates a reproducible source.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}
}

impl Default for RandomColors {
	fn default() -> Self {
		Self::new()
	}
}

impl ColorSource for RandomColors {
	fn next_color(&mut self) -> NoteColor {
		NoteColor::from_index(self.rng.gen_range(0..NoteColor::COUNT))
	}
}

/// Deterministic colors: walks a fixed sequence and wraps.
///
/// An empty sequence falls back to walking the palette.
#[derive(Debug, Clone)]
pub struct CycleColors {
	colors: Vec<NoteColor>,
	pos: usize,
}

impl CycleColors {
	pub fn new(colors: impl IntoIterator<Item = NoteColor>) -> Self {
		let mut colors: Vec<_> = colors.into_iter().collect();
		if colors.is_empty() {
			colors = NoteColor::palette().collect();
		}
		Self { colors, pos: 0 }
	}

	/// Walks the whole palette in order.
	pub fn palette() -> Self {
		Self::new(NoteColor::palette())
	}
}

impl ColorSource for CycleColors {
	fn next_color(&mut self) -> NoteColor {
		let color = self.colors[self.pos % self.colors.len()];
		self.pos = self.pos.wrapping_add(1);
		color
	}
}
