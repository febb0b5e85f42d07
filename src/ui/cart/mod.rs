//! Cart screen: load, quantity edits, delete and clear.
//!
//! Mutations for one cart line are serialised through an
//! [`ItemSequencer`], so each request starts from the previously confirmed
//! quantity. Key presses go through [`CartPresses`], which queues them per
//! line in the order they were made.

mod controller;
mod intent;
mod presses;
mod reducer;
mod sequencer;
mod state;

pub use controller::{CartController, MutationOutcome};
pub use intent::CartIntent;
pub use presses::{CartPress, CartPresses};
pub use reducer::CartReducer;
pub use sequencer::ItemSequencer;
pub use state::{decremented, sanitize_quantity, CartLine, CartState, SyncStatus};
