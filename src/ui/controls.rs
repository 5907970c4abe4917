//! The filter & sort control panel.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::{ContinentChoice, SubregionChoice, TopMetric, ViewFilter};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED};

/// A focusable control, in Tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Control {
    #[default]
    Alpha,
    TopPopulation,
    TopArea,
    Continent,
    Subregion,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Alpha,
        Control::TopPopulation,
        Control::TopArea,
        Control::Continent,
        Control::Subregion,
    ];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_selector(self) -> bool {
        matches!(self, Control::Continent | Control::Subregion)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Step a selector value by `direction`, wrapping at both ends.
pub fn cycle<T: PartialEq + Clone>(options: &[T], current: &T, direction: i32) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let position = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if direction.is_negative() {
        if position == 0 {
            len - 1
        } else {
            position - 1
        }
    } else if position + 1 >= len {
        0
    } else {
        position + 1
    };
    options.get(next).cloned()
}

/// Subregion selector options: the placeholder, then every indexed subregion.
pub fn subregion_options(subregions: &[String]) -> Vec<SubregionChoice> {
    std::iter::once(SubregionChoice::Placeholder)
        .chain(subregions.iter().cloned().map(SubregionChoice::Only))
        .collect()
}

pub struct ControlPanel<'a> {
    filter: &'a ViewFilter,
    focus: Option<Control>,
}

impl<'a> ControlPanel<'a> {
    /// `focus` is `None` while there is nothing to filter yet.
    pub fn new(filter: &'a ViewFilter, focus: Option<Control>) -> Self {
        Self { filter, focus }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let checkboxes = Line::from(vec![
            self.checkbox(Control::Alpha, "Alpha", self.filter.is_sorted_by_name()),
            Span::raw("   "),
            self.checkbox(
                Control::TopPopulation,
                "Top 10 by population",
                self.filter.top_n == Some(TopMetric::Population),
            ),
            Span::raw("   "),
            self.checkbox(
                Control::TopArea,
                "Top 10 by area",
                self.filter.top_n == Some(TopMetric::Area),
            ),
        ]);

        let continent = ContinentChoice::from(self.filter.continent);
        let subregion = SubregionChoice::from(self.filter.subregion.clone());
        let selectors = Line::from(vec![
            Span::styled("By continent: ", Style::default().fg(MUTED)),
            self.selector(Control::Continent, continent.label()),
            Span::raw("   "),
            Span::styled("By subregion: ", Style::default().fg(MUTED)),
            self.selector(Control::Subregion, subregion.label()),
        ]);

        Paragraph::new(vec![checkboxes, selectors]).block(
            Block::default()
                .title(Span::styled(" Filter & Sort ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn checkbox(&self, control: Control, label: &str, checked: bool) -> Span<'static> {
        let mark = if checked { "[x]" } else { "[ ]" };
        Span::styled(format!("{} {}", mark, label), self.style_for(control))
    }

    fn selector(&self, control: Control, value: &str) -> Span<'static> {
        Span::styled(format!("‹ {} ›", value), self.style_for(control))
    }

    fn style_for(&self, control: Control) -> Style {
        if self.focus == Some(control) {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(Control::Subregion.next(), Control::Alpha);
        assert_eq!(Control::Alpha.prev(), Control::Subregion);
        assert_eq!(Control::Alpha.next(), Control::TopPopulation);
    }

    #[test]
    fn cycle_wraps() {
        let options = [1, 2, 3];
        assert_eq!(cycle(&options, &3, 1), Some(1));
        assert_eq!(cycle(&options, &1, -1), Some(3));
        assert_eq!(cycle(&options, &2, 1), Some(3));
        assert_eq!(cycle::<i32>(&[], &0, 1), None);
    }

    #[test]
    fn subregion_options_start_with_placeholder() {
        let options = subregion_options(&["Caribbean".to_string()]);
        assert_eq!(
            options,
            vec![
                SubregionChoice::Placeholder,
                SubregionChoice::Only("Caribbean".to_string())
            ]
        );
    }
}
