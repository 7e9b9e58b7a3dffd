//! Text layout for note cells and the note grid.

#[cfg(test)]
mod tests;

use stickies_view::NoteElement;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::keymap::Move;

/// Content lines shown per note; longer notes are cut with an ellipsis.
pub const NOTE_LINES: usize = 5;

/// Rows taken by one note cell: borders, header, content.
pub const CELL_HEIGHT: usize = NOTE_LINES + 3;

/// Columns between adjacent cells.
pub const CELL_GAP: usize = 1;

/// Draft cursor glyph.
pub const CURSOR: char = '▏';

const ELLIPSIS: char = '…';

/// Word-wraps `text` to `width` display columns.
///
/// Explicit line breaks are kept. Words longer than a line are broken
/// mid-word. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut lines = Vec::new();

	for raw in text.split('\n') {
		let mut line = String::new();
		let mut line_width = 0;

		for word in raw.split(' ') {
			let word_width = word.width();
			let sep = usize::from(!line.is_empty());
			if line_width + sep + word_width <= width {
				if sep == 1 {
					line.push(' ');
				}
				line.push_str(word);
				line_width += sep + word_width;
				continue;
			}

			if !line.is_empty() {
				lines.push(std::mem::take(&mut line));
				line_width = 0;
			}
			for ch in word.chars() {
				let ch_width = ch.width().unwrap_or(0);
				if line_width + ch_width > width && !line.is_empty() {
					lines.push(std::mem::take(&mut line));
					line_width = 0;
				}
				line.push(ch);
				line_width += ch_width;
			}
		}
		lines.push(line);
	}
	lines
}

/// Cuts `lines` to `max` entries, marking the cut on the last kept line.
pub fn clip(mut lines: Vec<String>, max: usize, width: usize) -> Vec<String> {
	if lines.len() <= max {
		return lines;
	}
	lines.truncate(max);
	if let Some(last) = lines.last_mut() {
		let mut kept = fit(last, width.saturating_sub(1));
		while kept.ends_with(' ') {
			kept.pop();
		}
		kept.push(ELLIPSIS);
		*last = kept;
	}
	lines
}

/// Truncates or pads `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize) -> String {
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.extend(std::iter::repeat_n(' ', width - used));
	out
}

/// Header and content lines of a note cell, each exactly `inner` wide.
///
/// The header carries the delete affordance when displayed and an editing
/// marker when editing.
pub fn cell_lines(element: NoteElement<'_>, inner: usize) -> Vec<String> {
	let (header, body) = match element {
		NoteElement::Display { delete, content } => {
			let pad = inner.saturating_sub(delete.width());
			(format!("{}{delete}", " ".repeat(pad)), content.to_string())
		}
		NoteElement::Editing { draft } => ("editing".to_string(), format!("{draft}{CURSOR}")),
	};

	let mut lines = vec![fit(&header, inner)];
	lines.extend(
		clip(wrap(&body, inner), NOTE_LINES, inner)
			.iter()
			.map(|line| fit(line, inner)),
	);
	lines.resize(NOTE_LINES + 1, " ".repeat(inner));
	lines
}

/// Moves a grid selection; moves off the grid keep the selection.
pub fn grid_move(index: usize, len: usize, columns: usize, mv: Move) -> usize {
	if len == 0 {
		return 0;
	}
	let columns = columns.max(1);
	let index = index.min(len - 1);
	match mv {
		Move::Left if index % columns > 0 => index - 1,
		Move::Right if index % columns + 1 < columns && index + 1 < len => index + 1,
		Move::Up if index >= columns => index - columns,
		Move::Down if index + columns < len => index + columns,
		_ => index,
	}
}

/// Columns that fit in `width` terminal columns, capped at `max_columns`.
pub fn visible_columns(width: usize, cell_width: usize, max_columns: usize) -> usize {
	let per = cell_width + CELL_GAP;
	((width + CELL_GAP) / per).clamp(1, max_columns.max(1))
}

/// First grid row to draw so `selected_row` is visible within `rows` rows.
pub fn first_visible_row(selected_row: usize, rows: usize, current: usize) -> usize {
	let rows = rows.max(1);
	if selected_row < current {
		selected_row
	} else if selected_row >= current + rows {
		selected_row + 1 - rows
	} else {
		current
	}
}
