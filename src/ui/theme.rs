//! Color theme constants for the dashboard
//!
//! Minimal dark palette; accents are reserved for state (busy, success,
//! error, selected).

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::Gray;

/// Highlights and enabled controls
pub const COLOR_ACCENT: Color = Color::White;

/// Header logo and panel titles
pub const COLOR_HEADER: Color = Color::White;

/// Less important info and disabled controls
pub const COLOR_DIM: Color = Color::DarkGray;

/// Cursor row background
pub const COLOR_CURSOR_BG: Color = Color::Rgb(30, 30, 45);

// ============================================================================
// State Colors
// ============================================================================

/// Selected trends and enabled toggles
pub const COLOR_SELECTED: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Pending actions
pub const COLOR_BUSY: Color = Color::Yellow;

/// Success state
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error state
pub const COLOR_ERROR: Color = Color::Red;

/// Active services
pub const COLOR_ACTIVE: Color = Color::LightGreen;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for notification dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
