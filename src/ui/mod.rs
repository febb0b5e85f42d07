//! Terminal front end and the screen controllers it drives.
//!
//! Each screen is a small MVI unit (`state`, `intent`, `reducer`) plus an
//! async controller that calls the services and dispatches into a shared
//! [`Store`](mvi::Store). The render loop only reads snapshots.

pub mod app;
pub mod campaign;
pub mod cart;
pub mod events;
pub mod footer;
pub mod format;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod navigation;
pub mod notifications;
pub mod parts;
pub mod profile;
pub mod quantity;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

pub use runtime::run;
