//! Console output helpers for raw-mode sessions.
//!
//! Raw mode disables the terminal's LF-to-CRLF translation, so lines are
//! written with an explicit CRLF. Write failures are ignored: a broken
//! stdout surfaces as a device error on the next key read anyway.

use std::io::{self, Write};

/// Print one line, raw-mode safe.
pub fn say(message: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{message}\r\n");
    let _ = stdout.flush();
}

/// Print a prompt without a trailing newline and flush it.
pub fn ask(message: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{message}");
    let _ = stdout.flush();
}
