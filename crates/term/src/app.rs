//! Interactive board: terminal session, event loop, and key dispatch.


use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
	self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
	PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use stickies_config::BoardConfig;
use stickies_primitives::{ColorSource, NoteId};
use stickies_store::KeyValueStore;
use stickies_view::{Action, ViewSync};

use crate::keymap::{Command, KeyContext, map_key};
use crate::layout;

/// Part of the screen with focus when no note is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Input,
	Board,
}

/// Board plus terminal-side UI state.
pub struct App<B, C> {
	pub(crate) board: ViewSync<B, C>,
	pub(crate) focus: Focus,
	pub(crate) selected: usize,
	pub(crate) first_row: usize,
	pub(crate) max_columns: usize,
	pub(crate) note_width: usize,
	pub(crate) term_width: u16,
	pub(crate) term_height: u16,
	pub(crate) dirty: bool,
}

impl<B: KeyValueStore, C: ColorSource> App<B, C> {
	pub fn new(board: ViewSync<B, C>, config: &BoardConfig, size: (u16, u16)) -> Self {
		let focus = if board.notes().is_empty() {
			Focus::Input
		} else {
			Focus::Board
		};
		Self {
			board,
			focus,
			selected: 0,
			first_row: 0,
			max_columns: config.columns(),
			note_width: usize::from(config.note_width()),
			term_width: size.0,
			term_height: size.1,
			dirty: true,
		}
	}

	/// Who receives keys right now.
	pub fn context(&self) -> KeyContext {
		if self.board.notes().editing().is_some() {
			return KeyContext::Editing;
		}
		match self.focus {
			Focus::Input => KeyContext::Input,
			Focus::Board => KeyContext::Board,
		}
	}

	/// Notes per grid row at the current terminal width.
	pub fn columns(&self) -> usize {
		layout::visible_columns(usize::from(self.term_width), self.note_width, self.max_columns)
	}

	fn selected_id(&self) -> Option<NoteId> {
		self.board.notes().at(self.selected).map(|note| note.id())
	}

	/// Handles a key press. Returns `true` when the app should quit.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}

		let context = self.context();
		match map_key(context, key) {
			Command::Dispatch(action) => {
				let added = matches!(action, Action::SubmitInput | Action::Add);
				let before = self.board.notes().len();
				self.dirty |= self.board.dispatch(action);
				if added && self.board.notes().len() > before {
					self.selected = self.board.notes().len() - 1;
				}
			}
			Command::EditSelected => {
				if let Some(id) = self.selected_id() {
					self.dirty |= self.board.dispatch(Action::BeginEdit(id));
				}
			}
			Command::DeleteSelected => {
				if let Some(id) = self.selected_id() {
					self.dirty |= self.board.dispatch(Action::Delete(id));
				}
			}
			Command::Select(mv) => {
				let moved = layout::grid_move(
					self.selected,
					self.board.notes().len(),
					self.columns(),
					mv,
				);
				self.dirty |= moved != self.selected;
				self.selected = moved;
			}
			Command::CycleFocus => {
				self.focus = match self.focus {
					Focus::Input => Focus::Board,
					Focus::Board => Focus::Input,
				};
				self.dirty = true;
			}
			Command::Quit => {
				self.board.blur();
				tracing::debug!("Quit requested");
				return true;
			}
			Command::Ignore => {}
		}

		self.selected = self.selected.min(self.board.notes().len().saturating_sub(1));
		false
	}

	pub fn handle_resize(&mut self, width: u16, height: u16) {
		self.term_width = width;
		self.term_height = height;
		self.dirty = true;
	}
}

/// Raw mode and screen setup for one session, undone on drop.
///
/// Teardown runs on every exit path, including a failed setup step.
pub(crate) struct TerminalGuard<W: Write> {
	pub(crate) out: W,
	pub(crate) enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
	fn enter(out: W) -> io::Result<Self> {
		terminal::enable_raw_mode()?;
		let mut guard = Self {
			out,
			enhanced: false,
		};
		execute!(
			guard.out,
			terminal::EnterAlternateScreen,
			cursor::Hide,
			terminal::Clear(ClearType::All),
			event::EnableFocusChange
		)?;
		if terminal::supports_keyboard_enhancement().unwrap_or(false) {
			execute!(
				guard.out,
				PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
			)?;
			guard.enhanced = true;
		}
		Ok(guard)
	}
}

impl<W: Write> Drop for TerminalGuard<W> {
	fn drop(&mut self) {
		if self.enhanced {
			let _ = execute!(self.out, PopKeyboardEnhancementFlags);
		}
		let _ = execute!(
			self.out,
			event::DisableFocusChange,
			terminal::LeaveAlternateScreen,
			cursor::Show
		);
		if let Err(error) = terminal::disable_raw_mode() {
			tracing::warn!(%error, "Failed to leave raw mode");
		}
		let _ = self.out.flush();
	}
}

/// Runs the board in the terminal until the user quits.
pub fn run<B: KeyValueStore, C: ColorSource>(
	board: ViewSync<B, C>,
	config: &BoardConfig,
) -> io::Result<()> {
	let size = terminal::size().unwrap_or((80, 24));
	let mut app = App::new(board, config, size);

	let mut session = TerminalGuard::enter(io::stdout())?;
	run_loop(&mut app, &mut session.out)
}

fn run_loop<B: KeyValueStore, C: ColorSource>(
	app: &mut App<B, C>,
	out: &mut impl Write,
) -> io::Result<()> {
	loop {
		if app.dirty {
			app.render(out)?;
			app.dirty = false;
		}

		if event::poll(Duration::from_millis(250))? {
			match event::read()? {
				Event::Key(key) if app.handle_key(key) => break,
				Event::Resize(w, h) => app.handle_resize(w, h),
				Event::FocusLost => app.dirty |= app.board.dispatch(Action::Blur),
				_ => {}
			}
		}
	}
	Ok(())
}
