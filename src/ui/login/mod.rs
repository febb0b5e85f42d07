//! Login form.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{LoginController, LoginOutcome};
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginState};
