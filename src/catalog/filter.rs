//! View filter selections and the choice types the controls produce.

use std::fmt;

/// Continents as they appear in the source's `continents` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    Oceania,
    NorthAmerica,
    SouthAmerica,
}

impl Continent {
    /// Continents offered by the continent selector, in display order.
    pub const SELECTABLE: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
    ];

    /// Name exactly as spelled by the source data.
    pub fn as_str(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
        }
    }

    /// Case-sensitive parse of a source continent name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Africa" => Some(Continent::Africa),
            "Antarctica" => Some(Continent::Antarctica),
            "Asia" => Some(Continent::Asia),
            "Europe" => Some(Continent::Europe),
            "Oceania" => Some(Continent::Oceania),
            "North America" => Some(Continent::NorthAmerica),
            "South America" => Some(Continent::SouthAmerica),
            _ => None,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the continent selector. `All` clears the continent filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinentChoice {
    All,
    Only(Continent),
}

impl ContinentChoice {
    pub const ALL_LABEL: &'static str = "All";

    /// Selector options: `All` followed by the selectable continents.
    pub fn options() -> Vec<ContinentChoice> {
        std::iter::once(ContinentChoice::All)
            .chain(Continent::SELECTABLE.into_iter().map(ContinentChoice::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            ContinentChoice::All => Self::ALL_LABEL,
            ContinentChoice::Only(continent) => continent.as_str(),
        }
    }
}

impl From<Option<Continent>> for ContinentChoice {
    fn from(value: Option<Continent>) -> Self {
        value.map_or(ContinentChoice::All, ContinentChoice::Only)
    }
}

/// Value of the subregion selector. `Placeholder` clears the subregion filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubregionChoice {
    Placeholder,
    Only(String),
}

impl SubregionChoice {
    pub const PLACEHOLDER_LABEL: &'static str = "Choose region";

    pub fn label(&self) -> &str {
        match self {
            SubregionChoice::Placeholder => Self::PLACEHOLDER_LABEL,
            SubregionChoice::Only(name) => name,
        }
    }
}

impl From<Option<String>> for SubregionChoice {
    fn from(value: Option<String>) -> Self {
        value.map_or(SubregionChoice::Placeholder, SubregionChoice::Only)
    }
}

/// Numeric field ranked by the top-N filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMetric {
    Population,
    Area,
}

impl TopMetric {
    pub fn label(self) -> &'static str {
        match self {
            TopMetric::Population => "population",
            TopMetric::Area => "area",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
}

/// Current selections driving the filtered view.
///
/// Continent and subregion exclude each other. A top-N selection supersedes
/// both while it is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilter {
    pub continent: Option<Continent>,
    pub subregion: Option<String>,
    pub top_n: Option<TopMetric>,
    pub sort_key: Option<SortKey>,
}

impl ViewFilter {
    pub fn is_empty(&self) -> bool {
        *self == ViewFilter::default()
    }

    pub fn is_sorted_by_name(&self) -> bool {
        self.sort_key == Some(SortKey::Name)
    }
}
