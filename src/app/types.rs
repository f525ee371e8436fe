//! Type definitions for the application state.
//!
//! - [`Panel`] - Which dashboard panel has keyboard focus

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Trends,
    Composer,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Panel::Trends => Panel::Composer,
            Panel::Composer => Panel::Trends,
        }
    }
}
