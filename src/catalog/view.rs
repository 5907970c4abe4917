//! The loaded dataset together with the selections that narrow it.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::catalog::collate::compare_names;
use crate::catalog::filter::{ContinentChoice, SortKey, SubregionChoice, TopMetric, ViewFilter};
use crate::catalog::model::CountryRecord;

/// Number of records kept by the top-N filter.
pub const TOP_N: usize = 10;

/// Dataset, subregion index, current filter and the derived view.
///
/// The view holds indices into the dataset, so filtering never clones records.
/// Every operation leaves `view` consistent with `filter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    dataset: Arc<[CountryRecord]>,
    subregions: Vec<String>,
    filter: ViewFilter,
    view: Vec<usize>,
}

impl Catalog {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let dataset: Arc<[CountryRecord]> = records.into();
        let subregions = subregion_index(&dataset);
        let view = (0..dataset.len()).collect();
        Self {
            dataset,
            subregions,
            filter: ViewFilter::default(),
            view,
        }
    }

    /// Every record, in source order.
    pub fn dataset(&self) -> &[CountryRecord] {
        &self.dataset
    }

    /// Distinct subregions, sorted.
    pub fn subregions(&self) -> &[String] {
        &self.subregions
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Records currently displayed, in display order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &CountryRecord> + '_ {
        self.view.iter().map(|&index| &self.dataset[index])
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    pub fn filter_by_continent(&mut self, choice: ContinentChoice) {
        self.filter.continent = match choice {
            ContinentChoice::All => None,
            ContinentChoice::Only(continent) => Some(continent),
        };
        self.filter.subregion = None;
        self.filter.top_n = None;
        self.rederive();
    }

    pub fn filter_by_subregion(&mut self, choice: SubregionChoice) {
        self.filter.subregion = match choice {
            SubregionChoice::Placeholder => None,
            SubregionChoice::Only(name) => Some(name),
        };
        self.filter.continent = None;
        self.filter.top_n = None;
        self.rederive();
    }

    /// Rank the whole dataset, whatever continent or subregion is selected.
    pub fn filter_top10(&mut self, metric: TopMetric) {
        self.filter.top_n = Some(metric);
        self.filter.sort_key = None;
        self.rederive();
    }

    /// Drop the top-N selection and show the full dataset again.
    ///
    /// The superseded continent/subregion selections go too, so the controls
    /// never claim a filter the view does not apply.
    pub fn reset_top10(&mut self) {
        self.reset_filters();
    }

    /// Sort the current view by common name.
    pub fn sort_alphabetically(&mut self) {
        self.filter.sort_key = Some(SortKey::Name);
        sort_by_name(&self.dataset, &mut self.view);
    }

    /// Restore source order within the current filter.
    pub fn clear_sort(&mut self) {
        self.filter.sort_key = None;
        self.rederive();
    }

    pub fn reset_filters(&mut self) {
        self.filter = ViewFilter::default();
        self.rederive();
    }

    fn rederive(&mut self) {
        let mut view = match self.filter.top_n {
            Some(metric) => top_n(&self.dataset, metric, TOP_N),
            None => self
                .dataset
                .iter()
                .enumerate()
                .filter(|(_, record)| self.matches(record))
                .map(|(index, _)| index)
                .collect(),
        };
        if self.filter.is_sorted_by_name() {
            sort_by_name(&self.dataset, &mut view);
        }
        self.view = view;
    }

    fn matches(&self, record: &CountryRecord) -> bool {
        if let Some(continent) = self.filter.continent {
            return record.primary_continent() == Some(continent.as_str());
        }
        if let Some(subregion) = &self.filter.subregion {
            return record.subregion() == Some(subregion.as_str());
        }
        true
    }
}

/// Distinct non-empty subregions, sorted lexicographically.
pub fn subregion_index(records: &[CountryRecord]) -> Vec<String> {
    let mut subregions: Vec<String> = records
        .iter()
        .filter_map(|record| record.subregion())
        .map(str::to_owned)
        .collect();
    subregions.sort();
    subregions.dedup();
    subregions
}

/// Indices of the `n` records with the largest `metric`, descending.
///
/// The sort is stable, so ties keep source order. A missing area ranks below
/// every present one.
pub fn top_n(records: &[CountryRecord], metric: TopMetric, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.sort_by(|&a, &b| compare_metric(&records[b], &records[a], metric));
    indices.truncate(n);
    indices
}

fn compare_metric(a: &CountryRecord, b: &CountryRecord, metric: TopMetric) -> Ordering {
    match metric {
        TopMetric::Population => a.population.cmp(&b.population),
        TopMetric::Area => match (a.area, b.area) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        },
    }
}

fn sort_by_name(records: &[CountryRecord], view: &mut [usize]) {
    view.sort_by(|&a, &b| compare_names(&records[a].name.common, &records[b].name.common));
}
