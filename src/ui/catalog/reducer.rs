//! Reducer for the catalog.

use crate::catalog::Catalog;
use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Reducer for catalog lifecycle and filter transitions.
///
/// Load results only apply while `Loading`; a second result is dropped.
/// Filter intents only apply while `Ready`.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Loaded { records } => match state {
                CatalogState::Loading => CatalogState::Ready(Catalog::new(records)),
                other => other,
            },

            CatalogIntent::LoadFailed { message, details } => match state {
                CatalogState::Loading => CatalogState::Failed { message, details },
                other => other,
            },

            filter_intent => match state {
                CatalogState::Ready(mut catalog) => {
                    apply_filter(&mut catalog, filter_intent);
                    CatalogState::Ready(catalog)
                }
                other => other,
            },
        }
    }
}

fn apply_filter(catalog: &mut Catalog, intent: CatalogIntent) {
    match intent {
        CatalogIntent::FilterByContinent(choice) => catalog.filter_by_continent(choice),
        CatalogIntent::FilterBySubregion(choice) => catalog.filter_by_subregion(choice),
        CatalogIntent::FilterTop10(metric) => catalog.filter_top10(metric),
        CatalogIntent::ResetTop10 => catalog.reset_top10(),
        CatalogIntent::SortAlphabetically => catalog.sort_alphabetically(),
        CatalogIntent::ClearSort => catalog.clear_sort(),
        CatalogIntent::ResetFilters => catalog.reset_filters(),
        CatalogIntent::Loaded { .. } | CatalogIntent::LoadFailed { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContinentChoice, CountryRecord, TopMetric};

    fn records() -> Vec<CountryRecord> {
        serde_json::from_str(
            r#"[
                {"name": {"common": "Chile"}, "population": 19, "continents": ["South America"]},
                {"name": {"common": "Japan"}, "population": 125, "continents": ["Asia"]}
            ]"#,
        )
        .unwrap()
    }

    fn ready() -> CatalogState {
        CatalogReducer::reduce(
            CatalogState::Loading,
            CatalogIntent::Loaded { records: records() },
        )
    }

    #[test]
    fn loading_loaded_transitions_to_ready() {
        let state = ready();
        assert_eq!(state.catalog().map(|c| c.visible_len()), Some(2));
    }

    #[test]
    fn loading_failed_transitions_to_failed() {
        let state = CatalogReducer::reduce(
            CatalogState::Loading,
            CatalogIntent::LoadFailed {
                message: "Failed to fetch countries data".to_string(),
                details: "Upstream error: HTTP 500".to_string(),
            },
        );
        assert_eq!(state.error_message(), Some("Failed to fetch countries data"));
    }

    #[test]
    fn ready_ignores_second_load() {
        let state = CatalogReducer::reduce(
            ready(),
            CatalogIntent::Loaded { records: vec![] },
        );
        assert_eq!(state.catalog().map(|c| c.dataset().len()), Some(2));
    }

    #[test]
    fn failed_ignores_late_success() {
        let failed = CatalogState::Failed {
            message: "m".to_string(),
            details: "d".to_string(),
        };
        let state = CatalogReducer::reduce(
            failed.clone(),
            CatalogIntent::Loaded { records: records() },
        );
        assert_eq!(state, failed);
    }

    #[test]
    fn filter_while_loading_is_noop() {
        let state = CatalogReducer::reduce(
            CatalogState::Loading,
            CatalogIntent::FilterTop10(TopMetric::Population),
        );
        assert!(state.is_loading());
    }

    #[test]
    fn ready_filter_applies_to_catalog() {
        let state = CatalogReducer::reduce(
            ready(),
            CatalogIntent::FilterByContinent(ContinentChoice::Only(
                crate::catalog::Continent::Asia,
            )),
        );
        let names: Vec<&str> = state
            .catalog()
            .unwrap()
            .visible()
            .map(|r| r.name.common.as_str())
            .collect();
        assert_eq!(names, vec!["Japan"]);
    }
}
