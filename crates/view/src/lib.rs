//! View state for the notes board.
//!
//! The rendered view is the source of truth. [`NotesState`] holds the notes in
//! display order, and the persisted blob is only ever a snapshot of it:
//! [`ViewSync`] rebuilds the snapshot from the view and overwrites storage
//! after every mutation. Storage is read once, by [`ViewSync::start`].
//!
//! Each note is either displayed or being edited:
//!
//! ```text
//! Display --begin_edit--> Editing --commit | cancel | blur--> Display
//! ```
//!
//! Leaving `Editing` always rebuilds the note and saves, whether or not the
//! text changed. At most one note is editing at a time; any other action first
//! blurs it, which commits.

pub mod action;
pub mod input;
pub mod note;
pub mod state;
pub mod sync;
pub mod theme;

#[cfg(test)]
mod invariants;

pub use action::Action;
pub use input::{InputField, trim_blank};
pub use note::{DELETE_GLYPH, DELETE_LABEL, NoteElement, NoteMode, NoteView};
pub use state::NotesState;
pub use sync::ViewSync;
pub use theme::{ThemeMode, ThemeSwitch};
