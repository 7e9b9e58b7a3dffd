use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;
use stickies_view::Action;

use super::*;

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
	KeyEvent::new(code, modifiers)
}

#[rstest]
#[case(KeyContext::Input)]
#[case(KeyContext::Board)]
#[case(KeyContext::Editing)]
fn ctrl_c_quits_everywhere(#[case] context: KeyContext) {
	assert_eq!(
		map_key(context, with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
		Command::Quit
	);
}

#[rstest]
#[case(key(KeyCode::Enter), Command::Dispatch(Action::Commit))]
#[case(with(KeyCode::Enter, KeyModifiers::SHIFT), Command::Dispatch(Action::DraftNewline))]
#[case(with(KeyCode::Enter, KeyModifiers::ALT), Command::Dispatch(Action::DraftNewline))]
#[case(key(KeyCode::Esc), Command::Dispatch(Action::Cancel))]
#[case(key(KeyCode::Tab), Command::Dispatch(Action::Blur))]
#[case(key(KeyCode::Backspace), Command::Dispatch(Action::DraftBackspace))]
#[case(key(KeyCode::Char('q')), Command::Dispatch(Action::DraftChar('q')))]
#[case(with(KeyCode::Char('Q'), KeyModifiers::SHIFT), Command::Dispatch(Action::DraftChar('Q')))]
#[case(key(KeyCode::F(1)), Command::Ignore)]
fn editing_keys(#[case] event: KeyEvent, #[case] expected: Command) {
	assert_eq!(map_key(KeyContext::Editing, event), expected);
}

#[rstest]
#[case(key(KeyCode::Enter), Command::Dispatch(Action::SubmitInput))]
#[case(key(KeyCode::Backspace), Command::Dispatch(Action::InputBackspace))]
#[case(key(KeyCode::Tab), Command::CycleFocus)]
#[case(key(KeyCode::Char('t')), Command::Dispatch(Action::InputChar('t')))]
#[case(with(KeyCode::Char('x'), KeyModifiers::CONTROL), Command::Ignore)]
fn input_keys(#[case] event: KeyEvent, #[case] expected: Command) {
	assert_eq!(map_key(KeyContext::Input, event), expected);
}

#[rstest]
#[case(key(KeyCode::Char('q')), Command::Quit)]
#[case(key(KeyCode::BackTab), Command::CycleFocus)]
#[case(key(KeyCode::Char('h')), Command::Select(Move::Left))]
#[case(key(KeyCode::Right), Command::Select(Move::Right))]
#[case(key(KeyCode::Char('k')), Command::Select(Move::Up))]
#[case(key(KeyCode::Down), Command::Select(Move::Down))]
#[case(key(KeyCode::Enter), Command::EditSelected)]
#[case(key(KeyCode::Char('e')), Command::EditSelected)]
#[case(key(KeyCode::Delete), Command::DeleteSelected)]
#[case(key(KeyCode::Char('d')), Command::DeleteSelected)]
#[case(key(KeyCode::Char('t')), Command::Dispatch(Action::ToggleTheme))]
#[case(key(KeyCode::Char('z')), Command::Ignore)]
fn board_keys(#[case] event: KeyEvent, #[case] expected: Command) {
	assert_eq!(map_key(KeyContext::Board, event), expected);
}
