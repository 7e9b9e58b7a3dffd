//! Terminal key bindings.

#[cfg(test)]
mod tests;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stickies_view::Action;

/// Which part of the screen owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
	/// The new-note input line.
	Input,
	/// Note navigation.
	Board,
	/// A note's edit field.
	Editing,
}

/// Selection movement across the note grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
	Left,
	Right,
	Up,
	Down,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Forward a gesture to the board.
	Dispatch(Action),
	/// Edit-activation on the selected note.
	EditSelected,
	/// Delete affordance of the selected note.
	DeleteSelected,
	/// Move the note selection.
	Select(Move),
	/// Switch focus between input line and board.
	CycleFocus,
	Quit,
	Ignore,
}

/// Maps a key press in `context` to a command.
pub fn map_key(context: KeyContext, key: KeyEvent) -> Command {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
		return Command::Quit;
	}

	match context {
		KeyContext::Editing => map_editing(key, ctrl),
		KeyContext::Input => map_input(key, ctrl),
		KeyContext::Board => map_board(key, ctrl),
	}
}

fn map_editing(key: KeyEvent, ctrl: bool) -> Command {
	let newline = key
		.modifiers
		.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
	match key.code {
		KeyCode::Enter if newline => Command::Dispatch(Action::DraftNewline),
		KeyCode::Enter => Command::Dispatch(Action::Commit),
		KeyCode::Esc => Command::Dispatch(Action::Cancel),
		KeyCode::Tab | KeyCode::BackTab => Command::Dispatch(Action::Blur),
		KeyCode::Backspace => Command::Dispatch(Action::DraftBackspace),
		KeyCode::Char(ch) if !ctrl => Command::Dispatch(Action::DraftChar(ch)),
		_ => Command::Ignore,
	}
}

fn map_input(key: KeyEvent, ctrl: bool) -> Command {
	match key.code {
		KeyCode::Enter => Command::Dispatch(Action::SubmitInput),
		KeyCode::Backspace => Command::Dispatch(Action::InputBackspace),
		KeyCode::Tab | KeyCode::BackTab => Command::CycleFocus,
		KeyCode::Char(ch) if !ctrl => Command::Dispatch(Action::InputChar(ch)),
		_ => Command::Ignore,
	}
}

fn map_board(key: KeyEvent, ctrl: bool) -> Command {
	if ctrl {
		return Command::Ignore;
	}
	match key.code {
		KeyCode::Char('q') => Command::Quit,
		KeyCode::Tab | KeyCode::BackTab => Command::CycleFocus,
		KeyCode::Left | KeyCode::Char('h') => Command::Select(Move::Left),
		KeyCode::Right | KeyCode::Char('l') => Command::Select(Move::Right),
		KeyCode::Up | KeyCode::Char('k') => Command::Select(Move::Up),
		KeyCode::Down | KeyCode::Char('j') => Command::Select(Move::Down),
		KeyCode::Enter | KeyCode::Char('e') => Command::EditSelected,
		KeyCode::Delete | KeyCode::Char('d') => Command::DeleteSelected,
		KeyCode::Char('t') => Command::Dispatch(Action::ToggleTheme),
		_ => Command::Ignore,
	}
}
