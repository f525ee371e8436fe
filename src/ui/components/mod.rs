//! Reusable UI Components
//!
//! - `ButtonRow` - Horizontal row of clickable controls with enabled/busy states
//! - `StatusIndicator` - Spinner and result markers
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod button_row;
mod dialog_frame;
mod status_indicator;

pub use button_row::{render_button_row, Button, ButtonState};
pub(crate) use dialog_frame::calculate_dialog_width;
pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, spinner_frame, StatusIndicatorType};
