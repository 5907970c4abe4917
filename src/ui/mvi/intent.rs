//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (toggling a checkbox, picking a
/// continent) or system events (the dataset finished loading). Reducers
/// consume them to produce the next state.
pub trait Intent: Send + 'static {}
