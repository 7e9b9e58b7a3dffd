//! Keeps the view and the persisted snapshot consistent.


use stickies_primitives::{ColorSource, NoteId};
use stickies_store::{KeyValueStore, Storage};

use crate::action::Action;
use crate::input::{InputField, trim_blank};
use crate::state::NotesState;
use crate::theme::ThemeSwitch;

/// How an edit ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditExit {
	Commit,
	Cancel,
}

/// The board: view state plus its storage and color source.
///
/// Every mutation of the notes rewrites the whole snapshot. Storage failures
/// are logged and otherwise ignored; the view stays authoritative.
pub struct ViewSync<B, C> {
	state: NotesState,
	input: InputField,
	theme: ThemeSwitch,
	storage: Storage<B>,
	colors: C,
}

impl<B: KeyValueStore, C: ColorSource> ViewSync<B, C> {
	/// Starts a session: applies the persisted theme, loads the notes, and
	/// computes add enablement for the empty input.
	pub fn start(mut storage: Storage<B>, mut colors: C) -> Self {
		let mut theme = ThemeSwitch::default();
		theme.apply(storage.load_dark_mode());

		let state = NotesState::from_records(storage.load_notes(&mut colors));

		let mut input = InputField::new();
		input.refresh();

		tracing::debug!(notes = state.len(), dark = theme.is_dark(), "Board started");
		Self {
			state,
			input,
			theme,
			storage,
			colors,
		}
	}

	pub fn notes(&self) -> &NotesState {
		&self.state
	}

	pub fn input(&self) -> &InputField {
		&self.input
	}

	pub fn theme(&self) -> &ThemeSwitch {
		&self.theme
	}

	pub fn storage(&self) -> &Storage<B> {
		&self.storage
	}

	/// Tears the session down, returning its storage.
	pub fn into_storage(self) -> Storage<B> {
		self.storage
	}

	/// Applies one gesture. Returns whether anything visible changed.
	///
	/// Gestures outside the edit field blur it first, committing the edit.
	/// Re-activating the note already being edited keeps focus.
	pub fn dispatch(&mut self, action: Action) -> bool {
		let keeps_focus = action.targets_draft()
			|| matches!(action, Action::BeginEdit(id) if self.state.editing() == Some(id));
		let blurred = !keeps_focus && self.blur();

		let changed = match action {
			Action::InputChar(ch) => {
				self.input.insert_char(ch);
				true
			}
			Action::InputBackspace => {
				self.input.backspace();
				true
			}
			Action::SetInput(value) => {
				self.input.set_value(value);
				true
			}
			Action::SubmitInput => self.input.add_enabled() && self.add().is_some(),
			Action::Add => self.add().is_some(),
			Action::Delete(id) => self.delete(id),
			Action::BeginEdit(id) => self.begin_edit(id),
			Action::DraftChar(ch) => self.edit_draft(|draft| draft.push(ch)),
			Action::DraftNewline => self.edit_draft(|draft| draft.push('\n')),
			Action::DraftBackspace => self.edit_draft(|draft| {
				draft.pop();
			}),
			Action::Commit => self.commit(),
			Action::Cancel => self.cancel(),
			Action::Blur => self.blur(),
			Action::ToggleTheme => {
				self.toggle_theme();
				true
			}
		};

		blurred || changed
	}

	/// Adds the trimmed input as a new note with a random color.
	///
	/// Empty input is a no-op. On success the input is cleared, which disables
	/// the add control again.
	pub fn add(&mut self) -> Option<NoteId> {
		let text = self.input.trimmed();
		if text.is_empty() {
			return None;
		}
		let text = text.to_string();
		let color = self.colors.next_color();
		let id = self.state.push(text, color);
		self.input.clear();
		tracing::debug!(%id, %color, "Added note");
		self.persist();
		Some(id)
	}

	/// Removes a note. Unknown ids are ignored.
	pub fn delete(&mut self, id: NoteId) -> bool {
		let Some(removed) = self.state.remove(id) else {
			return false;
		};
		tracing::debug!(%id, color = %removed.color(), "Deleted note");
		self.persist();
		true
	}

	/// Puts a note into editing mode with its raw text as the draft.
	pub fn begin_edit(&mut self, id: NoteId) -> bool {
		if self.state.editing() == Some(id) {
			return false;
		}
		self.blur();
		let Some(note) = self.state.get_mut(id) else {
			return false;
		};
		note.begin_edit();
		tracing::debug!(%id, "Editing note");
		true
	}

	/// Commits the trimmed draft of the editing note.
	pub fn commit(&mut self) -> bool {
		self.finish_edit(EditExit::Commit)
	}

	/// Discards the draft of the editing note.
	pub fn cancel(&mut self) -> bool {
		self.finish_edit(EditExit::Cancel)
	}

	/// Focus left the edit field: same as commit.
	pub fn blur(&mut self) -> bool {
		self.finish_edit(EditExit::Commit)
	}

	/// Flips the theme and persists the flag.
	pub fn toggle_theme(&mut self) -> bool {
		let dark = self.theme.toggle();
		if let Err(error) = self.storage.save_dark_mode(dark) {
			tracing::warn!(%error, "Failed to save theme");
		}
		tracing::debug!(dark, "Toggled theme");
		dark
	}

	fn edit_draft(&mut self, edit: impl FnOnce(&mut String)) -> bool {
		let Some(id) = self.state.editing() else {
			return false;
		};
		let Some(draft) = self.state.get_mut(id).and_then(|note| note.draft_mut()) else {
			return false;
		};
		edit(draft);
		true
	}

	fn finish_edit(&mut self, exit: EditExit) -> bool {
		let Some(id) = self.state.editing() else {
			return false;
		};
		let Some(note) = self.state.get_mut(id) else {
			return false;
		};

		let text = match exit {
			EditExit::Commit => trim_blank(note.draft().unwrap_or_default()).to_string(),
			EditExit::Cancel => note.text().to_string(),
		};
		note.rebuild(text);
		tracing::debug!(%id, ?exit, "Finished editing note");
		self.persist();
		true
	}

	fn persist(&mut self) {
		let snapshot = self.state.snapshot();
		if let Err(error) = self.storage.save_notes(&snapshot) {
			tracing::warn!(%error, "Failed to save notes");
		}
	}
}
