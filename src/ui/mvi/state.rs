//! Base trait for UI state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States are cloned into the view for rendering and compared in tests,
/// and start from `Default` when a screen mounts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
