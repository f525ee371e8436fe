//! Mouse interaction for the dashboard.
//!
//! Widgets register clickable regions while rendering; the event loop hit
//! tests mouse-down positions against the registry and hands the resulting
//! [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
