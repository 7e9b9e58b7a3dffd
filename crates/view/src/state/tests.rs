use pretty_assertions::assert_eq;
use stickies_primitives::{NoteColor, NoteId, NoteRecord};

use super::NotesState;

fn sample() -> NotesState {
	NotesState::from_records([
		NoteRecord::new("a", NoteColor::Yellow),
		NoteRecord::new("b", NoteColor::Blue),
		NoteRecord::new("c", NoteColor::Pink),
	])
}

#[test]
fn from_records_keeps_order_and_assigns_increasing_ids() {
	let state = sample();
	let ids: Vec<_> = state.iter().map(|n| n.id()).collect();
	assert_eq!(ids, [NoteId(1), NoteId(2), NoteId(3)]);
	assert_eq!(
		state.snapshot(),
		vec![
			NoteRecord::new("a", NoteColor::Yellow),
			NoteRecord::new("b", NoteColor::Blue),
			NoteRecord::new("c", NoteColor::Pink),
		]
	);
}

#[test]
fn ids_are_not_reused_after_remove() {
	let mut state = sample();
	state.remove(NoteId(3)).expect("present");
	let id = state.push("d", NoteColor::Green);
	assert_eq!(id, NoteId(4));
}

#[test]
fn remove_unknown_is_none() {
	let mut state = sample();
	assert!(state.remove(NoteId(99)).is_none());
	assert_eq!(state.len(), 3);
}

#[test]
fn snapshot_uses_committed_text_while_editing() {
	let mut state = sample();
	let note = state.get_mut(NoteId(2)).expect("present");
	note.begin_edit();
	note.draft_mut().expect("editing").push_str(" changed");

	assert_eq!(state.editing(), Some(NoteId(2)));
	assert_eq!(state.snapshot()[1], NoteRecord::new("b", NoteColor::Blue));
}

#[test]
fn position_and_at_agree() {
	let state = sample();
	let second = state.at(1).expect("present");
	assert_eq!(state.position(second.id()), Some(1));
	assert!(state.at(3).is_none());
}
