//! Intents for the catalog.

use crate::catalog::{ContinentChoice, CountryRecord, SubregionChoice, TopMetric};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the catalog reducer.
#[derive(Debug)]
pub enum CatalogIntent {
    /// The fetch succeeded.
    Loaded { records: Vec<CountryRecord> },

    /// The fetch failed. `message` is shown to the user, `details` under it.
    LoadFailed { message: String, details: String },

    FilterByContinent(ContinentChoice),

    FilterBySubregion(SubregionChoice),

    FilterTop10(TopMetric),

    ResetTop10,

    SortAlphabetically,

    /// Alpha checkbox unchecked.
    ClearSort,

    ResetFilters,
}

impl Intent for CatalogIntent {}
