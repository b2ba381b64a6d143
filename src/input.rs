use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Input kinds the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Click,
    /// Leave the current session for the menu.
    Menu,
}

/// A nonblocking source of input batches. `timeout` bounds how long the
/// source may wait for the first event; the batch may be empty.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Input>>;

    /// The latest display size reported since the last call, if any.
    fn take_resize(&mut self) -> Option<(u16, u16)> {
        None
    }
}

/// Maps a terminal event to a game input. Resizes and everything else that
/// is not listed here yield `None`.
pub fn from_terminal_event(event: &Event) -> Option<Input> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            ..
        }) => Some(Input::Click),
        Event::Key(key) if key.kind != KeyEventKind::Release => from_key(key),
        _ => None,
    }
}

fn from_key(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Input::Click),
        KeyCode::Char('r') => Some(Input::Menu),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_press_is_click() {
        assert_eq!(
            from_terminal_event(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Input::Click)
        );
        assert_eq!(
            from_terminal_event(&mouse(MouseEventKind::Down(MouseButton::Right))),
            Some(Input::Click)
        );
        assert_eq!(
            from_terminal_event(&mouse(MouseEventKind::Up(MouseButton::Left))),
            None
        );
        assert_eq!(from_terminal_event(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_flap_keys_are_clicks() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(
                from_terminal_event(&key(code, KeyModifiers::NONE)),
                Some(Input::Click)
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            from_terminal_event(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Input::Quit)
        );
        assert_eq!(
            from_terminal_event(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Input::Quit)
        );
        assert_eq!(
            from_terminal_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(from_terminal_event(&release), None);
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert_eq!(from_terminal_event(&Event::Resize(80, 24)), None);
        assert_eq!(from_terminal_event(&Event::FocusGained), None);
        assert_eq!(
            from_terminal_event(&key(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            from_terminal_event(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_r_returns_to_menu() {
        assert_eq!(
            from_terminal_event(&key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(Input::Menu)
        );
    }
}
