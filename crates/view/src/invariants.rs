//! Machine-checkable invariants for the board.
//!
//! Each invariant is a `pub(crate) fn test_*()` that runs as a test.

use stickies_primitives::{CycleColors, NoteColor, NoteRecord};
use stickies_store::{KeyValueStore, MemoryStore, NOTES_KEY, Storage};

use crate::{Action, ViewSync};

fn board(texts: &[&str]) -> ViewSync<MemoryStore, CycleColors> {
	let mut storage = Storage::new(MemoryStore::new());
	let records: Vec<_> = texts
		.iter()
		.map(|text| NoteRecord::new(*text, NoteColor::Yellow))
		.collect();
	storage.save_notes(&records).expect("seed");
	ViewSync::start(storage, CycleColors::palette())
}

fn stored(board: &ViewSync<MemoryStore, CycleColors>) -> Option<String> {
	board.storage().backend().get(NOTES_KEY)
}

/// Invariant: The persisted blob MUST equal the snapshot of the view, in view
/// order, after every mutating gesture.
#[cfg_attr(test, test)]
pub(crate) fn test_persisted_blob_mirrors_view_order() {
	let mut board = board(&["a", "b", "c"]);
	let middle = board.notes().at(1).expect("note").id();

	board.dispatch(Action::Delete(middle));
	board.dispatch(Action::SetInput("d".into()));
	board.dispatch(Action::Add);

	let expected = encode(&board.notes().snapshot());
	assert_eq!(stored(&board), Some(expected));
	let order: Vec<_> = board.notes().iter().map(|n| n.text().to_string()).collect();
	assert_eq!(order, ["a", "c", "d"]);
}

/// Invariant: At most one note MUST be in editing mode at any time.
#[cfg_attr(test, test)]
pub(crate) fn test_single_editing_note() {
	let mut board = board(&["a", "b", "c"]);
	let ids: Vec<_> = board.notes().iter().map(|n| n.id()).collect();

	for id in ids.iter().chain(ids.iter().rev()) {
		board.dispatch(Action::BeginEdit(*id));
		let editing = board.notes().iter().filter(|n| n.is_editing()).count();
		assert_eq!(editing, 1);
	}
}

/// Invariant: Leaving editing MUST return the note to display mode and
/// rewrite storage, whatever the exit path.
#[cfg_attr(test, test)]
pub(crate) fn test_edit_exit_returns_to_display_and_persists() {
	let seeded = r#"[ { "text": "a", "color": "yellow" } ]"#;
	for exit in [Action::Commit, Action::Cancel, Action::Blur] {
		let mut backend = MemoryStore::new();
		backend.set(NOTES_KEY, seeded.into()).expect("seed");
		let mut board = ViewSync::start(Storage::new(backend), CycleColors::palette());
		let id = board.notes().at(0).expect("note").id();

		board.dispatch(Action::BeginEdit(id));
		assert_eq!(stored(&board).as_deref(), Some(seeded), "{exit:?}");

		assert!(board.dispatch(exit.clone()), "{exit:?}");
		assert!(board.notes().iter().all(|n| !n.is_editing()), "{exit:?}");
		assert_eq!(stored(&board), Some(encode(&board.notes().snapshot())), "{exit:?}");
	}
}

/// Invariant: The add control MUST be enabled iff the trimmed input is
/// non-empty, and adding MUST disable it again.
#[cfg_attr(test, test)]
pub(crate) fn test_add_enablement_mirrors_input() {
	let mut board = board(&[]);
	for (input, enabled) in [("", false), ("  ", false), (" x ", true), ("\n", false)] {
		board.dispatch(Action::SetInput(input.into()));
		assert_eq!(board.input().add_enabled(), enabled, "{input:?}");
	}

	board.dispatch(Action::SetInput("note".into()));
	board.dispatch(Action::SubmitInput);
	assert!(!board.input().add_enabled());
}

fn encode(records: &[NoteRecord]) -> String {
	stickies_store::notes::encode(records).expect("encode")
}
