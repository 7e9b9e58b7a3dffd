//! User gestures the board understands.

use stickies_primitives::NoteId;

/// A single user gesture, applied to completion by [`ViewSync::dispatch`].
///
/// [`ViewSync::dispatch`]: crate::ViewSync::dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Type a character into the new-note input.
	InputChar(char),
	/// Delete the last character of the new-note input.
	InputBackspace,
	/// Replace the new-note input.
	SetInput(String),
	/// Enter in the new-note input: adds only while the add control is enabled.
	SubmitInput,
	/// Press the add control.
	Add,
	/// Press a note's delete affordance.
	Delete(NoteId),
	/// Edit-activation gesture on a note.
	BeginEdit(NoteId),
	/// Type a character into the edit field.
	DraftChar(char),
	/// Insert a line break into the edit field.
	DraftNewline,
	/// Delete the last character of the edit field.
	DraftBackspace,
	/// Commit the edit field.
	Commit,
	/// Discard the edit field.
	Cancel,
	/// The edit field lost focus.
	Blur,
	/// Press the theme control.
	ToggleTheme,
}

impl Action {
	/// Whether the gesture targets the active edit field.
	///
	/// All other gestures move focus away from it first.
	pub fn targets_draft(&self) -> bool {
		matches!(
			self,
			Action::DraftChar(_)
				| Action::DraftNewline
				| Action::DraftBackspace
				| Action::Commit
				| Action::Cancel
				| Action::Blur
		)
	}
}
