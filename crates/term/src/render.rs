use std::io::{self, Write};

use crossterm::style::{
	Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};
use stickies_primitives::ColorSource;
use stickies_store::KeyValueStore;
use stickies_view::{DELETE_LABEL, NoteView, ThemeMode};

use crate::app::App;
use crate::keymap::KeyContext;
use crate::layout::{self, CELL_GAP, CELL_HEIGHT, CURSOR};
use crate::palette::{self, UiColors};

const TITLE: &str = " Stickies";
const INPUT_PROMPT: &str = " New note › ";
const ADD_LABEL: &str = "[ Add ]";
/// Rows above the grid: header, gap, input, gap.
const GRID_TOP: u16 = 4;

impl<B: KeyValueStore, C: ColorSource> App<B, C> {
	pub fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
		let mode = self.board.theme().mode();
		let ui = palette::ui(mode);
		let width = usize::from(self.term_width);

		queue!(
			out,
			SetBackgroundColor(ui.bg),
			SetForegroundColor(ui.fg),
			terminal::Clear(ClearType::All)
		)?;

		self.render_header(out, &ui, width)?;
		self.render_input(out, &ui, width)?;
		self.render_grid(out, &ui, mode)?;
		self.render_footer(out, &ui, width)?;

		queue!(out, ResetColor)?;
		out.flush()
	}

	fn render_header(&self, out: &mut impl Write, ui: &UiColors, width: usize) -> io::Result<()> {
		let theme = self.board.theme();
		let marker = if theme.pressed() { "●" } else { "○" };
		let control = format!("[t] {marker} {} ", theme.label());
		let title_width = width.saturating_sub(control.chars().count());

		queue!(
			out,
			cursor::MoveTo(0, 0),
			SetAttribute(Attribute::Bold),
			SetForegroundColor(ui.fg),
			Print(layout::fit(TITLE, title_width)),
			SetAttribute(Attribute::Reset),
			SetBackgroundColor(ui.bg),
			SetForegroundColor(ui.accent),
			Print(control)
		)
	}

	fn render_input(&self, out: &mut impl Write, ui: &UiColors, width: usize) -> io::Result<()> {
		let input = self.board.input();
		let focused = self.context() == KeyContext::Input;
		let caret = if focused { CURSOR.to_string() } else { String::new() };
		let field_width = width
			.saturating_sub(INPUT_PROMPT.chars().count() + ADD_LABEL.len() + 2)
			.max(1);
		let field = layout::fit(&format!("{}{caret}", input.value()), field_width);
		let add_color = if input.add_enabled() { ui.accent } else { ui.muted };

		queue!(
			out,
			cursor::MoveTo(0, 2),
			SetForegroundColor(if focused { ui.accent } else { ui.muted }),
			Print(INPUT_PROMPT),
			SetForegroundColor(ui.fg),
			Print(field),
			Print(" "),
			SetForegroundColor(add_color),
			Print(ADD_LABEL)
		)
	}

	fn render_grid(&mut self, out: &mut impl Write, ui: &UiColors, mode: ThemeMode) -> io::Result<()> {
		let notes = self.board.notes();
		if notes.is_empty() {
			return queue!(
				out,
				cursor::MoveTo(1, GRID_TOP),
				SetForegroundColor(ui.muted),
				Print("No notes yet. Type one above and press Enter.")
			);
		}

		let columns = self.columns();
		let available = usize::from(self.term_height.saturating_sub(GRID_TOP + 1));
		let rows = (available / CELL_HEIGHT).max(1);
		self.first_row = layout::first_visible_row(self.selected / columns, rows, self.first_row);

		let highlight = self.context() != KeyContext::Input;
		let notes = self.board.notes();
		let start = self.first_row * columns;
		for (offset, note) in notes.iter().skip(start).take(rows * columns).enumerate() {
			let row = offset / columns;
			let col = offset % columns;
			let x = col * (self.note_width + CELL_GAP);
			let y = usize::from(GRID_TOP) + row * CELL_HEIGHT;
			let selected = highlight && start + offset == self.selected;
			self.render_cell(out, note, (x, y), selected, ui, mode)?;
		}
		Ok(())
	}

	fn render_cell(
		&self,
		out: &mut impl Write,
		note: &NoteView,
		(x, y): (usize, usize),
		selected: bool,
		ui: &UiColors,
		mode: ThemeMode,
	) -> io::Result<()> {
		let inner = self.note_width.saturating_sub(4);
		let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) =
			if selected || note.is_editing() {
				('╔', '╗', '╚', '╝', '═', '║')
			} else {
				('┌', '┐', '└', '┘', '─', '│')
			};
		let border = if selected { ui.accent } else { ui.note_fg };
		let rule = horizontal.to_string().repeat(inner + 2);
		let (x, y) = (to_u16(x), to_u16(y));

		queue!(
			out,
			SetBackgroundColor(palette::note(note.color(), mode)),
			SetForegroundColor(border),
			cursor::MoveTo(x, y),
			Print(format!("{top_left}{rule}{top_right}"))
		)?;

		let lines = layout::cell_lines(note.element(), inner);
		for (i, line) in lines.iter().enumerate() {
			queue!(
				out,
				cursor::MoveTo(x, y + to_u16(i + 1)),
				SetForegroundColor(border),
				Print(vertical),
				SetForegroundColor(ui.note_fg),
				Print(format!(" {line} ")),
				SetForegroundColor(border),
				Print(vertical)
			)?;
		}

		queue!(
			out,
			cursor::MoveTo(x, y + to_u16(lines.len() + 1)),
			Print(format!("{bottom_left}{rule}{bottom_right}")),
			SetBackgroundColor(ui.bg)
		)
	}

	fn render_footer(&self, out: &mut impl Write, ui: &UiColors, width: usize) -> io::Result<()> {
		let help = match self.context() {
			KeyContext::Input => " enter add · tab board · ctrl-c quit".to_string(),
			KeyContext::Board => format!(
				" ←↓↑→ move · e edit · d {} · t theme · tab input · q quit",
				DELETE_LABEL.to_lowercase()
			),
			KeyContext::Editing => {
				" enter save · alt-enter newline · esc cancel · tab leave".to_string()
			}
		};
		queue!(
			out,
			cursor::MoveTo(0, self.term_height.saturating_sub(1)),
			SetBackgroundColor(ui.bg),
			SetForegroundColor(ui.muted),
			Print(layout::fit(&help, width)),
			SetForegroundColor(Color::Reset)
		)
	}
}

fn to_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}
