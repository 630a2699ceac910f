//! Input event types and key-binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl InputEvent {
    /// Get the character if this is a plain character input.
    pub fn char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.ctrl && !self.alt => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g. "Ctrl+r", "Enter",
    /// "q"). Character comparisons are case-insensitive; Shift is ignored
    /// so bindings like "?" work regardless of how the terminal reports it.
    pub fn matches(&self, binding: &str) -> bool {
        let mut want_ctrl = false;
        let mut want_alt = false;
        let mut want_key = "";

        for part in binding.split('+') {
            match part.trim().to_lowercase().as_str() {
                "ctrl" => want_ctrl = true,
                "alt" => want_alt = true,
                "shift" => {}
                _ => want_key = part.trim(),
            }
        }

        if self.ctrl != want_ctrl || self.alt != want_alt {
            return false;
        }

        match want_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "delete" | "del" => self.key == Key::Delete,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            s => match (s.chars().next(), s.chars().count()) {
                (Some(want), 1) => match self.key {
                    Key::Char(c) => c.eq_ignore_ascii_case(&want),
                    _ => false,
                },
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: Key) -> InputEvent {
        InputEvent {
            key,
            ctrl: false,
            alt: false,
        }
    }

    #[test]
    fn test_matches_plain_char_case_insensitive() {
        assert!(event(Key::Char('q')).matches("q"));
        assert!(event(Key::Char('Q')).matches("q"));
        assert!(!event(Key::Char('x')).matches("q"));
    }

    #[test]
    fn test_matches_named_keys() {
        assert!(event(Key::Enter).matches("Enter"));
        assert!(event(Key::Escape).matches("Esc"));
        assert!(!event(Key::Enter).matches("Esc"));
    }

    #[test]
    fn test_matches_modifiers() {
        let ctrl_r = InputEvent {
            key: Key::Char('r'),
            ctrl: true,
            alt: false,
        };
        assert!(ctrl_r.matches("Ctrl+r"));
        assert!(!ctrl_r.matches("r"));
        assert!(!event(Key::Char('r')).matches("Ctrl+r"));
    }
}
