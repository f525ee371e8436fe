//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and capture the mouse for clicks and hover.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Errors are ignored, so this is safe to call more than once and from a
/// panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore stdout after a panic or fatal error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_writes_restore_sequences() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        // Leaving the alternate screen is CSI ? 1049 l
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049l"));
    }

    #[test]
    fn test_enter_tui_mode_enables_mouse() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.contains("\x1b[?1000h"));
    }
}
