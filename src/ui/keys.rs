use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::core::AppEvent;

/// Translate a key press into an application event
pub fn map_key(key: &KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+key combinations first, before the general char pattern
    if ctrl {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('g') => Some(AppEvent::ToggleGranularity),
            KeyCode::Char('t') => Some(AppEvent::CycleViewMode),
            KeyCode::Char('l') => Some(AppEvent::ClearPane),
            KeyCode::Home => Some(AppEvent::ScrollTop),
            KeyCode::End => Some(AppEvent::ScrollBottom),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::F(1) => Some(AppEvent::ToggleHelp),
        KeyCode::F(2) => Some(AppEvent::ToggleGranularity),
        KeyCode::F(3) => Some(AppEvent::CycleViewMode),
        KeyCode::Tab | KeyCode::BackTab => Some(AppEvent::FocusNext),
        KeyCode::PageUp => Some(AppEvent::ScrollUp),
        KeyCode::PageDown => Some(AppEvent::ScrollDown),
        KeyCode::Enter => Some(AppEvent::Newline),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Delete => Some(AppEvent::Delete),
        KeyCode::Left => Some(AppEvent::CursorLeft),
        KeyCode::Right => Some(AppEvent::CursorRight),
        KeyCode::Up => Some(AppEvent::CursorUp),
        KeyCode::Down => Some(AppEvent::CursorDown),
        KeyCode::Home => Some(AppEvent::CursorHome),
        KeyCode::End => Some(AppEvent::CursorEnd),
        KeyCode::Char(c) => Some(AppEvent::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_keys() {
        assert_eq!(map_key(&key(KeyCode::Char('x'))), Some(AppEvent::Insert('x')));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(AppEvent::Insert('X'))
        );
        assert_eq!(map_key(&key(KeyCode::Enter)), Some(AppEvent::Newline));
    }

    #[test]
    fn test_mode_toggles() {
        assert_eq!(map_key(&key(KeyCode::F(2))), Some(AppEvent::ToggleGranularity));
        assert_eq!(map_key(&key(KeyCode::F(3))), Some(AppEvent::CycleViewMode));
        assert_eq!(map_key(&ctrl('g')), Some(AppEvent::ToggleGranularity));
        assert_eq!(map_key(&ctrl('t')), Some(AppEvent::CycleViewMode));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        assert_eq!(map_key(&ctrl('q')), Some(AppEvent::Quit));
        assert_eq!(map_key(&ctrl('z')), None);
    }
}
