//! Key bindings

use console::Key;

use super::state::{Action, Mode};

/// Decodes key presses into actions for the current mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Keymap;

impl Keymap {
    pub fn new() -> Self {
        Self
    }

    /// Map `key` to an action; unbound keys give `None`
    pub fn decode(&self, mode: Mode, key: &Key) -> Option<Action> {
        match mode {
            Mode::Normal => Self::normal(key),
            Mode::Edit => Self::edit(key),
        }
    }

    fn normal(key: &Key) -> Option<Action> {
        let action = match key {
            Key::ArrowUp | Key::Char('k') => Action::CursorUp,
            Key::ArrowDown | Key::Char('j') => Action::CursorDown,
            Key::Char(' ') => Action::ToggleInclude,
            Key::Char('c') => Action::CycleType,
            Key::Char('e') => Action::BeginEdit,
            Key::Enter => Action::Confirm,
            // Ctrl-C arrives as ETX when the terminal is in raw mode
            Key::Char('q') | Key::Escape | Key::Char('\u{3}') => Action::Abort,
            _ => return None,
        };
        Some(action)
    }

    fn edit(key: &Key) -> Option<Action> {
        let action = match key {
            Key::Enter => Action::CommitEdit,
            Key::Escape => Action::CancelEdit,
            Key::Backspace => Action::DeleteChar,
            Key::Char(c) if !c.is_control() => Action::InsertChar(*c),
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_bindings() {
        let keymap = Keymap::new();
        let cases = [
            (Key::ArrowUp, Action::CursorUp),
            (Key::Char('k'), Action::CursorUp),
            (Key::ArrowDown, Action::CursorDown),
            (Key::Char('j'), Action::CursorDown),
            (Key::Char(' '), Action::ToggleInclude),
            (Key::Char('c'), Action::CycleType),
            (Key::Char('e'), Action::BeginEdit),
            (Key::Enter, Action::Confirm),
            (Key::Char('q'), Action::Abort),
            (Key::Escape, Action::Abort),
        ];
        for (key, action) in cases {
            assert_eq!(keymap.decode(Mode::Normal, &key), Some(action), "{:?}", key);
        }
        assert_eq!(keymap.decode(Mode::Normal, &Key::Char('x')), None);
        assert_eq!(keymap.decode(Mode::Normal, &Key::Tab), None);
    }

    #[test]
    fn test_edit_bindings() {
        let keymap = Keymap::new();
        assert_eq!(keymap.decode(Mode::Edit, &Key::Enter), Some(Action::CommitEdit));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Escape), Some(Action::CancelEdit));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Backspace), Some(Action::DeleteChar));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Char('q')), Some(Action::InsertChar('q')));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Char(' ')), Some(Action::InsertChar(' ')));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Char('é')), Some(Action::InsertChar('é')));
        assert_eq!(keymap.decode(Mode::Edit, &Key::Char('\u{3}')), None);
        assert_eq!(keymap.decode(Mode::Edit, &Key::ArrowUp), None);
    }
}
