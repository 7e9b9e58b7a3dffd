use pretty_assertions::assert_eq;
use rstest::rstest;
use stickies_view::NoteElement;

use super::*;

#[test]
fn wrap_breaks_on_words() {
	assert_eq!(wrap("the quick brown fox", 9), ["the quick", "brown fox"]);
}

#[test]
fn wrap_keeps_explicit_newlines_and_empty_lines() {
	assert_eq!(wrap("a\n\nb", 10), ["a", "", "b"]);
	assert_eq!(wrap("", 10), [""]);
}

#[test]
fn wrap_hard_breaks_long_words() {
	assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
}

#[test]
fn wrap_measures_display_width() {
	assert_eq!(wrap("日本語テキスト", 6), ["日本語", "テキス", "ト"]);
}

#[test]
fn fit_pads_and_truncates() {
	assert_eq!(fit("ab", 4), "ab  ");
	assert_eq!(fit("abcdef", 3), "abc");
	assert_eq!(fit("日本", 3), "日 ");
}

#[test]
fn clip_marks_cut_lines() {
	let lines = vec!["one".to_string(), "two".into(), "three".into()];
	assert_eq!(clip(lines.clone(), 3, 5), lines);
	assert_eq!(clip(lines, 2, 5), ["one", "two…"]);
}

#[test]
fn display_cell_has_delete_affordance_and_fixed_height() {
	let lines = cell_lines(
		NoteElement::Display {
			delete: "×",
			content: "hello",
		},
		8,
	);
	assert_eq!(lines.len(), NOTE_LINES + 1);
	assert_eq!(lines[0], "       ×");
	assert_eq!(lines[1], "hello   ");
	assert!(lines.iter().all(|l| l.width() == 8));
}

#[test]
fn editing_cell_shows_draft_with_cursor() {
	let lines = cell_lines(NoteElement::Editing { draft: "hi" }, 8);
	assert_eq!(lines[0], "editing ");
	assert_eq!(lines[1], format!("hi{CURSOR}     "));
}

#[test]
fn long_notes_are_clipped() {
	let text = "a\nb\nc\nd\ne\nf\ng";
	let lines = cell_lines(NoteElement::Display { delete: "×", content: text }, 4);
	assert_eq!(lines.len(), NOTE_LINES + 1);
	assert_eq!(lines[NOTE_LINES], "e…  ");
}

#[rstest]
#[case(0, 5, 3, Move::Left, 0)]
#[case(1, 5, 3, Move::Left, 0)]
#[case(3, 5, 3, Move::Left, 3)]
#[case(2, 5, 3, Move::Right, 2)]
#[case(3, 5, 3, Move::Right, 4)]
#[case(4, 5, 3, Move::Right, 4)]
#[case(4, 5, 3, Move::Up, 1)]
#[case(1, 5, 3, Move::Up, 1)]
#[case(1, 5, 3, Move::Down, 4)]
#[case(2, 5, 3, Move::Down, 2)]
#[case(9, 5, 3, Move::Left, 3)]
#[case(0, 0, 3, Move::Down, 0)]
fn grid_moves(
	#[case] index: usize,
	#[case] len: usize,
	#[case] columns: usize,
	#[case] mv: Move,
	#[case] expected: usize,
) {
	assert_eq!(grid_move(index, len, columns, mv), expected);
}

#[test]
fn visible_columns_fit_terminal() {
	assert_eq!(visible_columns(80, 28, 3), 2);
	assert_eq!(visible_columns(200, 28, 3), 3);
	assert_eq!(visible_columns(10, 28, 3), 1);
	assert_eq!(visible_columns(86, 28, 3), 3);
}

#[test]
fn scrolling_follows_selection() {
	assert_eq!(first_visible_row(0, 2, 0), 0);
	assert_eq!(first_visible_row(3, 2, 0), 2);
	assert_eq!(first_visible_row(1, 2, 2), 1);
	assert_eq!(first_visible_row(2, 2, 1), 1);
}
