//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every screen keeps its state in a reducer-driven [`Store`]. Controllers
//! perform the network calls and dispatch the results as intents.
//!
//! # Architecture
//!
//! ```text
//! View event ──→ Controller ──→ Service ──→ Intent ──→ Reducer ──→ State ──→ View
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: user actions or results of service calls
//! - **Reducer**: pure function that transforms state based on intents
//! - **Store**: shared, lockable home of one screen's state

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
