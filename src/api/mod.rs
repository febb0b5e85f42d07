//! Request layer for the storefront REST API.
//!
//! Every call resolves to an [`ApiResponse`] envelope. Transport, decode and
//! status failures are folded into the envelope's `error` instead of being
//! returned as `Err`, so callers only ever check `success`.

mod client;
mod envelope;
mod error;

pub use client::{ApiClient, Query};
pub use envelope::{codes, ApiError, ApiResponse};
pub use error::RequestError;
