//! State for the catalog.

use crate::catalog::Catalog;
use crate::ui::mvi::UiState;

/// Dataset lifecycle.
///
/// `Ready` and `Failed` are terminal: there is no path back to `Loading`
/// within a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Fetch in flight.
    #[default]
    Loading,

    /// Dataset loaded; filters apply to it.
    Ready(Catalog),

    /// Fetch failed; nothing is shown but the message.
    Failed { message: String, details: String },
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
