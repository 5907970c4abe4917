//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// `Default` is the state before anything happened, which lets callers
/// `std::mem::take` the state out while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
