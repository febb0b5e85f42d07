//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// The only place where screen state changes.
///
/// `reduce` is pure: `(State, Intent) -> State`. Network calls, timers and
/// logging live in the controllers around it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents, starting from `state`.
    fn reduce_all(
        state: Self::State,
        intents: impl IntoIterator<Item = Self::Intent>,
    ) -> Self::State {
        intents.into_iter().fold(state, Self::reduce)
    }
}
