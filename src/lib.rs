//! Storefront client for ordering vehicle parts.
//!
//! The library holds everything below the terminal: configuration, the
//! request layer, the session store, typed service wrappers and the
//! screen controllers. The `partorder` binary wires them to a ratatui UI.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod services;
pub mod session;
pub mod shutdown;
pub mod ui;
