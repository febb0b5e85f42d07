//! Home dashboard: greeting, stats and the campaign slider.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::HomeController;
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
