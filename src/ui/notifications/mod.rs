//! Notification inbox.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::NotificationsController;
pub use intent::NotificationsIntent;
pub use reducer::NotificationsReducer;
pub use state::NotificationsState;
