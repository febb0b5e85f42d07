//! Session store and authentication.
//!
//! The session is an explicit value created at start-up and handed to the
//! request layer and the auth service. It persists the bearer token and the
//! logged-in user through a [`Storage`] backend.

mod auth;
mod storage;
mod store;
mod token;

pub use auth::{AuthError, AuthService, Credentials};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::SessionStore;
pub use token::SessionToken;
