//! Quantity picker shown before adding a part to the cart.

mod intent;
mod reducer;
mod state;

pub use intent::QuantityIntent;
pub use reducer::QuantityReducer;
pub use state::{Confirmation, QuantityDialogState};
