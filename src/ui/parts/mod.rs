//! Parts catalogue: paginated search, detail panel and add-to-cart.

mod controller;
mod debounce;
mod intent;
mod reducer;
mod state;

pub use controller::{AddOutcome, PartsController};
pub use debounce::SearchDebounce;
pub use intent::PartsIntent;
pub use reducer::PartsReducer;
pub use state::{Alert, PageRequest, PartsSort, PartsState};
