use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which pane receives typing and arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Examples,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Examples,
            Focus::Examples => Focus::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Backspace,
    ClearLine,
    Submit,
    ToggleFocus,
    /// Copy the highlighted example into the question.
    SelectExample,
    MoveSelection(isize),
    Scroll(isize),
    ScrollHome,
    Quit,
}

const PAGE: isize = 10;

/// Map one key event to an action. Releases and repeats are dropped.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match (key.code, focus) {
        (KeyCode::Esc, _) => InputAction::Quit,
        (KeyCode::Char('c'), _) if ctrl => InputAction::Quit,
        (KeyCode::Char('u'), Focus::Input) if ctrl => InputAction::ClearLine,
        (KeyCode::Tab | KeyCode::BackTab, _) => InputAction::ToggleFocus,

        (KeyCode::Enter, Focus::Input) => InputAction::Submit,
        (KeyCode::Enter, Focus::Examples) => InputAction::SelectExample,
        (KeyCode::Up, Focus::Examples) => InputAction::MoveSelection(-1),
        (KeyCode::Down, Focus::Examples) => InputAction::MoveSelection(1),

        (KeyCode::Up, Focus::Input) => InputAction::Scroll(-1),
        (KeyCode::Down, Focus::Input) => InputAction::Scroll(1),
        (KeyCode::PageUp, _) => InputAction::Scroll(-PAGE),
        (KeyCode::PageDown, _) => InputAction::Scroll(PAGE),
        (KeyCode::Home, _) => InputAction::ScrollHome,

        (KeyCode::Backspace, Focus::Input) => InputAction::Backspace,
        (KeyCode::Char(c), Focus::Input) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            InputAction::Insert(c)
        }
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_goes_to_input() {
        assert_eq!(
            map_key(press(KeyCode::Char('q')), Focus::Input),
            Some(InputAction::Insert('q'))
        );
        assert_eq!(map_key(press(KeyCode::Char('q')), Focus::Examples), None);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(
            map_key(press(KeyCode::Enter), Focus::Input),
            Some(InputAction::Submit)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), Focus::Examples),
            Some(InputAction::SelectExample)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key(press(KeyCode::Esc), Focus::Input),
            Some(InputAction::Quit)
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Focus::Input
            ),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, Focus::Input), None);
    }
}
