//! Keystroke source abstraction over the terminal.
//!
//! Responsibilities:
//! - Provide blocking one-key-at-a-time reads for the interactive loop.
//! - Scope exclusive raw-mode access with acquire/release semantics so the
//!   Add flow can temporarily hand the terminal back for line input.
//!
//! Invariants:
//! - `acquire` and `release` are idempotent-tolerant: calling either twice
//!   in a row is a no-op, not an error.
//! - `read_key` requires the source to be acquired; raw key capture and
//!   buffered line input are mutually exclusive access modes.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// One discrete key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// A printable character key.
    Char(char),
    /// The cancel key (Escape, or Ctrl+C as a terminal convention).
    Esc,
    /// Any other key (Enter, arrows, function keys, ...).
    Other,
}

/// Blocking source of key presses with scoped exclusive access.
pub trait KeySource {
    /// Take exclusive raw-mode access to the input device.
    fn acquire(&mut self) -> io::Result<()>;

    /// Give exclusive access back so the terminal can do line input.
    fn release(&mut self) -> io::Result<()>;

    /// Block until one key press is available. Fails if the source is not
    /// acquired or on a device error.
    fn read_key(&mut self) -> io::Result<KeyPress>;
}

/// Terminal-backed key source using crossterm raw mode.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    active: bool,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn acquire(&mut self) -> io::Result<()> {
        if !self.active {
            enable_raw_mode()?;
            self.active = true;
        }
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        if self.active {
            disable_raw_mode()?;
            self.active = false;
        }
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        if !self.active {
            return Err(io::Error::other("keyboard source is not acquired"));
        }
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(map_key_event(&key));
            }
            // Resize, focus, and mouse events are not key presses.
        }
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        // Leave the terminal usable even on an error path.
        if self.active {
            let _ = disable_raw_mode();
        }
    }
}

/// Map a crossterm key event to a [`KeyPress`].
fn map_key_event(key: &KeyEvent) -> KeyPress {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyPress::Esc;
    }
    match key.code {
        KeyCode::Char(c) => KeyPress::Char(c),
        KeyCode::Esc => KeyPress::Esc,
        _ => KeyPress::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_plain_characters() {
        assert_eq!(
            map_key_event(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            KeyPress::Char('a')
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            KeyPress::Char('S')
        );
    }

    #[test]
    fn maps_escape_to_cancel() {
        assert_eq!(
            map_key_event(&press(KeyCode::Esc, KeyModifiers::NONE)),
            KeyPress::Esc
        );
    }

    #[test]
    fn maps_ctrl_c_to_cancel() {
        assert_eq!(
            map_key_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyPress::Esc
        );
    }

    #[test]
    fn maps_non_character_keys_to_other() {
        assert_eq!(
            map_key_event(&press(KeyCode::Enter, KeyModifiers::NONE)),
            KeyPress::Other
        );
        assert_eq!(
            map_key_event(&press(KeyCode::F(5), KeyModifiers::NONE)),
            KeyPress::Other
        );
    }
}
