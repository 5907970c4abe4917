//! Catalog feature module.
//!
//! Drives the dataset lifecycle and the filter/sort controller.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum (Loading → Ready | Failed)
//! - `intent.rs` - Load results and filter/sort requests
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogState;
