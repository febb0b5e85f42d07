//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, text input)
/// - Results of service calls (loaded, confirmed, failed)
pub trait Intent: Send + 'static {}
