//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The shortcut hints rendered by the dashboard
//! footer live in [`crate::keymap`]; keep the two in sync.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use portico_model::Message;

/// Default poll timeout for events.
///
/// The timeout doubles as the animation tick cadence: the run loop advances
/// one pending resize step per poll round.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard, mouse, or resize) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::Resize(width, height) => Some(Message::Resized {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Esc` | Close the dashboard |
/// | `Up` or `k` | Navigate up |
/// | `Down` or `j` | Navigate down |
/// | `Enter` or `Space` | Select |
/// | `r` | Refresh |
/// | `t` | Cycle theme |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Message::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::NavigateDown),

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        // Other actions
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('t') => Some(Message::CycleTheme),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_message(event), Some(Message::Quit));
    }

    #[test]
    fn navigation_keys_map() {
        assert_eq!(key_to_message(key(KeyCode::Up)), Some(Message::NavigateUp));
        assert_eq!(
            key_to_message(key(KeyCode::Char('k'))),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
        assert_eq!(
            key_to_message(key(KeyCode::Char('j'))),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn action_keys_map() {
        assert_eq!(key_to_message(key(KeyCode::Enter)), Some(Message::Select));
        assert_eq!(
            key_to_message(key(KeyCode::Char(' '))),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(key(KeyCode::Char('r'))),
            Some(Message::Refresh)
        );
        assert_eq!(
            key_to_message(key(KeyCode::Char('t'))),
            Some(Message::CycleTheme)
        );
        assert_eq!(key_to_message(key(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(key_to_message(key(KeyCode::Esc)), Some(Message::Escape));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(key_to_message(key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_message(key(KeyCode::Tab)), None);
    }

    #[test]
    fn resize_event_maps() {
        let event = Event::Resize(132, 43);
        assert_eq!(
            event_to_message(&event),
            Some(Message::Resized {
                width: 132,
                height: 43
            })
        );
    }

    #[test]
    fn every_display_keymap_has_a_binding() {
        use crate::keymap::display_keymaps;

        // The footer promises these shortcuts; make sure each resolves
        for map in display_keymaps() {
            let message = match map.label {
                "↑/↓" => key_to_message(key(KeyCode::Up)),
                "⏎" => key_to_message(key(KeyCode::Enter)),
                label => key_to_message(key(KeyCode::Char(
                    label.chars().next().expect("non-empty label"),
                ))),
            };
            assert!(message.is_some(), "unbound shortcut hint: {}", map.label);
        }
    }
}
