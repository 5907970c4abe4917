use crate::catalog::{ContinentChoice, CountryRecord, SubregionChoice, TopMetric};
use crate::config::UiConfig;
use crate::loader::LoadError;
use crate::ui::card::CARD_HEIGHT;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::controls::{cycle, subregion_options, Control};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Control,
    /// Dataset lifecycle and filters (MVI pattern).
    catalog: CatalogState,
    /// First card line shown in the body.
    scroll: usize,
    scroll_step: usize,
    viewport_height: usize,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Control::default(),
            catalog: CatalogState::default(),
            scroll: 0,
            scroll_step: usize::from(ui.scroll_step.max(1)),
            viewport_height: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport_height = usize::from(body_rect(Rect::new(0, 0, cols, rows)).height);
        self.clamp_scroll();
    }

    pub fn on_catalog_loaded(&mut self, result: Result<Vec<CountryRecord>, LoadError>) {
        let intent = match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Country dataset ready");
                CatalogIntent::Loaded { records }
            }
            Err(err) => {
                tracing::error!(error = %err, "Country dataset failed to load");
                CatalogIntent::LoadFailed {
                    message: err.user_message().to_string(),
                    details: err.details(),
                }
            }
        };
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    // -- Focus -----------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Space/Enter on the focused control: toggle a checkbox or step a selector.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Control::Alpha => self.toggle_sort(),
            Control::TopPopulation => self.toggle_top10(TopMetric::Population),
            Control::TopArea => self.toggle_top10(TopMetric::Area),
            Control::Continent | Control::Subregion => self.cycle_focused(1),
        }
    }

    /// Step the focused selector. Checkboxes ignore this.
    pub fn cycle_focused(&mut self, direction: i32) {
        let Some(catalog) = self.catalog.catalog() else {
            return;
        };
        match self.focus {
            Control::Continent => {
                let current = ContinentChoice::from(catalog.filter().continent);
                if let Some(choice) = cycle(&ContinentChoice::options(), &current, direction) {
                    self.select_continent(choice);
                }
            }
            Control::Subregion => {
                let current = SubregionChoice::from(catalog.filter().subregion.clone());
                let options = subregion_options(catalog.subregions());
                if let Some(choice) = cycle(&options, &current, direction) {
                    self.select_subregion(choice);
                }
            }
            _ => {}
        }
    }

    // -- Filter & sort ---------------------------------------------------------

    pub fn toggle_sort(&mut self) {
        let sorted = self
            .catalog
            .catalog()
            .is_some_and(|catalog| catalog.filter().is_sorted_by_name());
        if sorted {
            self.dispatch_filter(CatalogIntent::ClearSort);
        } else {
            self.dispatch_filter(CatalogIntent::SortAlphabetically);
        }
    }

    /// Checking a top-N box selects it; unchecking the active one resets.
    pub fn toggle_top10(&mut self, metric: TopMetric) {
        let active = self
            .catalog
            .catalog()
            .and_then(|catalog| catalog.filter().top_n);
        if active == Some(metric) {
            self.dispatch_filter(CatalogIntent::ResetTop10);
        } else {
            self.dispatch_filter(CatalogIntent::FilterTop10(metric));
        }
    }

    pub fn select_continent(&mut self, choice: ContinentChoice) {
        self.dispatch_filter(CatalogIntent::FilterByContinent(choice));
    }

    pub fn select_subregion(&mut self, choice: SubregionChoice) {
        self.dispatch_filter(CatalogIntent::FilterBySubregion(choice));
    }

    pub fn reset_filters(&mut self) {
        self.dispatch_filter(CatalogIntent::ResetFilters);
    }

    fn dispatch_filter(&mut self, intent: CatalogIntent) {
        tracing::debug!(?intent, "Catalog intent");
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
        self.scroll = 0;
    }

    // -- Scrolling -------------------------------------------------------------

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.scroll_step);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.scroll_step);
        self.clamp_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.page_size());
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Total rendered lines of the visible cards.
    pub fn content_height(&self) -> usize {
        self.catalog
            .catalog()
            .map_or(0, |catalog| catalog.visible_len() * CARD_HEIGHT)
    }

    fn max_scroll(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
