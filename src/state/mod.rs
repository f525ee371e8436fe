//! State containers for the dashboard.
//!
//! - [`SelectionStore`]: checked trend ids, owned by the app root
//! - [`TrendBrowserState`]: collected trends and the row cursor
//! - [`ContentComposerState`]: platforms, feature flags, generated bundle
//! - [`DashboardSummaryState`]: stats and system status snapshots
//! - [`NotificationQueue`]: blocking notifications
//! - [`ActionTracker`]: Idle/Pending lifecycle shared by every async action

pub mod action;
pub mod composer;
pub mod notification;
pub mod selection;
pub mod summary;
pub mod trends;

pub use action::{ActionState, ActionTracker, RequestToken};
pub use composer::{ContentComposerState, Feature, FeatureFlags, PUBLISH_PLATFORM};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use selection::SelectionStore;
pub use summary::DashboardSummaryState;
pub use trends::TrendBrowserState;
