use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-key single-flight queue.
///
/// Holders of the guard for one key run one at a time, in the order they
/// called [`acquire`](Self::acquire) (tokio's mutex is FIFO). Different keys
/// never wait on each other.
#[derive(Clone, Default)]
pub struct ItemSequencer {
    locks: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl ItemSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(key.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Drop the queue for `key` once no one is waiting on it.
    pub fn forget(&self, key: &str) {
        let mut locks = self.locks.lock();
        if let Some(lock) = locks.get(key) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(key);
            }
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.locks.lock().len()
    }
}
