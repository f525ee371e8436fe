//! UI rendering for the trend dashboard
//!
//! One screen, drawn from a read-only [`RenderContext`](dashboard::RenderContext)
//! each frame:
//! - Header with the backend url and service status
//! - Overview card with totals and the refresh/automation controls
//! - Trend browser and content composer, side by side or stacked
//! - Footer with key hints, and the notification modal on top
//!
//! ## Responsive Layout System
//!
//! Render functions size themselves through [`LayoutContext`], which wraps
//! the terminal dimensions and answers questions like `should_stack_panels()`
//! or `is_short()`.

pub mod components;
pub mod dashboard;
pub mod helpers;
pub mod interaction;
mod layout;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_BUSY, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_SELECTED, COLOR_SUCCESS,
};

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext, SizeCategory};

use ratatui::Frame;

use crate::app::App;
use dashboard::{render_dashboard, RenderContext};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the dashboard and rebuild the App's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let layout = LayoutContext::new(area.width, area.height);

    // The registry is filled while the rest of the App is borrowed for the context
    let mut registry = std::mem::take(&mut app.hit_areas);
    registry.clear();

    {
        let ctx = RenderContext::from_app(app, layout);
        render_dashboard(frame, area, &ctx, &mut registry);
    }

    if let Some((rect, style)) = registry.hover_highlight() {
        frame.buffer_mut().set_style(rect, style);
    }

    app.hit_areas = registry;
}
