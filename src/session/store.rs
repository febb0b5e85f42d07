use std::path::PathBuf;
use std::sync::Arc;

use crate::services::User;

use super::storage::{FileStorage, MemoryStorage, Storage, StorageError};
use super::token::SessionToken;

const TOKEN_KEY: &str = "user_token";
const USER_KEY: &str = "user_data";

/// Persisted token + user pair.
///
/// Cheap to clone; all clones share the same storage backend. Reads never
/// fail: a missing, unreadable or corrupt value reads as `None`.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Session persisted to a JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn token(&self) -> Option<SessionToken> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => Some(SessionToken::new(token)),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "Could not read session token");
                None
            }
        }
    }

    pub fn user(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!(error = %err, "Could not read session user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::debug!(error = %err, "Stored session user is corrupt");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Store the pair, user first: a token is never left without its user.
    pub fn save(&self, token: &SessionToken, user: &User) -> Result<(), StorageError> {
        self.save_user(user)?;
        if let Err(err) = self.storage.set_item(TOKEN_KEY, token.expose()) {
            let _ = self.storage.remove_item(USER_KEY);
            return Err(err);
        }
        Ok(())
    }

    /// Replace the stored user, keeping the token.
    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        // User only holds strings, encoding cannot fail.
        let encoded = serde_json::to_string(user).unwrap_or_default();
        self.storage.set_item(USER_KEY, &encoded)
    }

    /// Remove token and user. Both removals are attempted even if the first fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove_item(TOKEN_KEY);
        let user = self.storage.remove_item(USER_KEY);
        token.and(user)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            username: Some("dealer01".to_string()),
            name: "User Demo".to_string(),
            email: "demo@menara-agung.com".to_string(),
            role: "dealer".to_string(),
        }
    }

    #[test]
    fn save_then_clear() {
        let store = SessionStore::in_memory();
        assert!(!store.is_logged_in());
        assert!(store.user().is_none());

        store.save(&SessionToken::new("tok"), &user()).unwrap();
        assert_eq!(store.token().unwrap().expose(), "tok");
        assert_eq!(store.user(), Some(user()));

        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn corrupt_user_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "{broken").unwrap();
        let store = SessionStore::new(storage);
        assert!(store.user().is_none());
    }

    /// Memory storage that refuses writes to one key.
    struct FailingKey {
        inner: MemoryStorage,
        key: &'static str,
    }

    impl Storage for FailingKey {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Io {
                    path: PathBuf::from("memory"),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn failed_save_leaves_nothing_half_written() {
        for key in [USER_KEY, TOKEN_KEY] {
            let store = SessionStore::new(FailingKey {
                inner: MemoryStorage::new(),
                key,
            });

            assert!(store.save(&SessionToken::new("tok"), &user()).is_err());
            assert!(!store.is_logged_in(), "failing key {}", key);
            assert!(store.user().is_none(), "failing key {}", key);
        }
    }
}
