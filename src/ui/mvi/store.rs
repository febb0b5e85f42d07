use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Shared state cell driven by a single reducer.
///
/// Clones share the same state. Async controllers dispatch into it from
/// spawned tasks while the render loop takes snapshots.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
    listener: Option<Listener>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listener: self.listener.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            listener: None,
            _reducer: PhantomData,
        }
    }

    /// Call `listener` after every dispatch (used to wake the render loop).
    pub fn with_listener(mut self, listener: impl Fn() + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn dispatch(&self, intent: R::Intent) {
        self.dispatch_then(intent, |_| ());
    }

    /// Dispatch and read the resulting state under the same lock.
    pub fn dispatch_then<T>(&self, intent: R::Intent, read: impl FnOnce(&R::State) -> T) -> T {
        let value = {
            let mut guard = self.state.lock();
            let current = std::mem::take(&mut *guard);
            *guard = R::reduce(current, intent);
            read(&guard)
        };
        if let Some(listener) = &self.listener {
            listener();
        }
        value
    }

    /// Dispatch only if `when` holds for the current state, checked under
    /// the same lock as the reduction. Returns `read` of the new state.
    pub fn dispatch_when<T>(
        &self,
        when: impl FnOnce(&R::State) -> bool,
        intent: R::Intent,
        read: impl FnOnce(&R::State) -> T,
    ) -> Option<T> {
        let value = {
            let mut guard = self.state.lock();
            if !when(&guard) {
                return None;
            }
            let current = std::mem::take(&mut *guard);
            *guard = R::reduce(current, intent);
            read(&guard)
        };
        if let Some(listener) = &self.listener {
            listener();
        }
        Some(value)
    }

    /// Drop everything back to `State::default()`.
    pub fn reset(&self) {
        *self.state.lock() = R::State::default();
        if let Some(listener) = &self.listener {
            listener();
        }
    }

    pub fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }

    pub fn read<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state.lock())
    }
}
