use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_input_mode_key(key_event: KeyEvent) -> InputModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => InputModeAction::Quit,
            KeyCode::Char('w') if ctrl => InputModeAction::DeleteWordBackward,
            KeyCode::Esc => InputModeAction::Quit,
            KeyCode::Enter => InputModeAction::Commit,
            KeyCode::Tab | KeyCode::Down => InputModeAction::FocusList,
            KeyCode::Backspace => InputModeAction::Backspace,
            KeyCode::Delete => InputModeAction::Delete,
            KeyCode::Left => InputModeAction::MoveCursorLeft,
            KeyCode::Right => InputModeAction::MoveCursorRight,
            KeyCode::Home => InputModeAction::MoveCursorHome,
            KeyCode::End => InputModeAction::MoveCursorEnd,
            KeyCode::Char(c) => InputModeAction::InsertChar(c),
            _ => InputModeAction::None,
        }
    }

    pub fn handle_list_mode_key(key_event: KeyEvent) -> ListModeAction {
        match key_event.code {
            KeyCode::Char('q') => ListModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListModeAction::Quit
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::Char('i') => ListModeAction::FocusInput,
            KeyCode::Up | KeyCode::Char('k') => ListModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => ListModeAction::MoveSelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => ListModeAction::ToggleSelectedItem,
            KeyCode::Char('a') => ListModeAction::ToggleAllDone,
            KeyCode::Char('c') => ListModeAction::ClearCompleted,
            KeyCode::Char('?') => ListModeAction::ToggleHelpMode,
            _ => ListModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InputModeAction {
    None,
    Quit,
    Commit,
    FocusList,
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum ListModeAction {
    None,
    Quit,
    FocusInput,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleSelectedItem,
    ToggleAllDone, // the "mark all as done" checkbox
    ClearCompleted,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode_editing_keys() {
        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Commit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Delete);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Delete);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::MoveCursorHome);

        let key_event = KeyEvent::from(KeyCode::End);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::MoveCursorEnd);
    }

    #[test]
    fn test_input_mode_letters_are_text() {
        // Letters that are commands in the list are plain text while typing
        for c in ['q', 'a', 'c', 'j', '?', ' '] {
            let key_event = KeyEvent::from(KeyCode::Char(c));
            assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::InsertChar(c));
        }
    }

    #[test]
    fn test_input_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Quit);

        let mut key_event = KeyEvent::from(KeyCode::Char('w'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::DeleteWordBackward);
    }

    #[test]
    fn test_input_mode_focus_keys() {
        let key_event = KeyEvent::from(KeyCode::Tab);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::FocusList);

        let key_event = KeyEvent::from(KeyCode::Down);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::FocusList);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Quit);
    }

    #[test]
    fn test_list_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ToggleSelectedItem);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ToggleSelectedItem);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ToggleAllDone);

        let key_event = KeyEvent::from(KeyCode::Char('c'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::ClearCompleted);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::FocusInput);
    }

    #[test]
    fn test_list_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::MoveSelectionUp);
    }

    #[test]
    fn test_list_mode_ctrl_c_quits() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_list_mode_key(key_event), ListModeAction::Quit);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }
}
