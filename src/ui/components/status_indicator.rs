//! Status Indicator Component
//!
//! Inline spinner, success, error and info markers for panel headers and
//! notification titles.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::{COLOR_BUSY, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (the event loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 8;

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    /// Render as a marker followed by the message.
    pub fn to_spans(&self) -> Vec<Span<'static>> {
        let (marker, message, color) = match self {
            StatusIndicatorType::Spinner { message, frame } => {
                (get_spinner_char(*frame), message, COLOR_BUSY)
            }
            StatusIndicatorType::Success { message } => ('\u{25CF}', message, COLOR_SUCCESS),
            StatusIndicatorType::Error { message } => ('\u{2717}', message, COLOR_ERROR),
            StatusIndicatorType::Info { message } => ('\u{2139}', message, COLOR_DIM),
        };
        vec![
            Span::styled(format!("{} ", marker), Style::default().fg(color)),
            Span::styled(
                message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for the App tick counter
pub fn spinner_frame(tick: u64) -> usize {
    ((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}
