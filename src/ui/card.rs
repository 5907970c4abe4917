//! One card per country: field formatting and the lines that draw it.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::CountryRecord;
use crate::ui::format::{format_decimal, group_thousands};
use crate::ui::theme::{ACCENT, HEADER_TEXT, LINK, MUTED};

pub const NOT_AVAILABLE: &str = "N/A";

/// Rows drawn by [`card_lines`]: title, fields, blank separator.
pub const CARD_HEIGHT: usize = 1 + FIELD_COUNT + 1;

const FIELD_COUNT: usize = 10;

/// Display strings for every field of a card, with "N/A" already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub title: String,
    pub official_name: String,
    pub capital: String,
    pub population: String,
    pub languages: String,
    pub currencies: String,
    pub area: String,
    pub subregion: String,
    pub continent: String,
    pub flag_url: String,
    pub map_url: String,
}

impl CardFields {
    pub fn from_record(record: &CountryRecord) -> Self {
        let title = match record.flag.as_deref().filter(|f| !f.is_empty()) {
            Some(flag) => format!("{} {}", flag, record.name.common),
            None => record.name.common.clone(),
        };

        Self {
            title,
            official_name: or_na(record.name.official.as_deref()),
            capital: or_na(record.primary_capital()),
            population: group_thousands(record.population),
            languages: format_languages(record),
            currencies: format_currencies(record),
            area: record
                .area
                .filter(|area| *area != 0.0)
                .map(format_decimal)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            subregion: or_na(record.subregion()),
            continent: or_na(record.primary_continent()),
            flag_url: or_na(record.flags.png.as_deref()),
            map_url: or_na(record.maps.google_maps.as_deref()),
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); FIELD_COUNT] {
        [
            ("Official name", self.official_name.as_str()),
            ("Capital", self.capital.as_str()),
            ("Population", self.population.as_str()),
            ("Languages", self.languages.as_str()),
            ("Currency", self.currencies.as_str()),
            ("Area (mi²)", self.area.as_str()),
            ("Subregion", self.subregion.as_str()),
            ("Continents", self.continent.as_str()),
            ("Flag", self.flag_url.as_str()),
            ("Google Maps", self.map_url.as_str()),
        ]
    }
}

pub fn card_lines(record: &CountryRecord) -> Vec<Line<'static>> {
    let fields = CardFields::from_record(record);
    let label_style = Style::default().fg(MUTED);
    let value_style = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(Line::from(Span::styled(
        fields.title.clone(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    for (label, value) in fields.rows() {
        let style = if label == "Google Maps" || label == "Flag" {
            Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED)
        } else {
            value_style
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", label), label_style),
            Span::styled(value.to_string(), style),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn format_languages(record: &CountryRecord) -> String {
    match &record.languages {
        Some(languages) if !languages.is_empty() => languages
            .iter()
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_currencies(record: &CountryRecord) -> String {
    match &record.currencies {
        Some(currencies) if !currencies.is_empty() => currencies
            .iter()
            .map(|(_, currency)| match currency.symbol.as_deref() {
                Some(symbol) if !symbol.is_empty() => format!("{} ({})", currency.name, symbol),
                _ => currency.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}
