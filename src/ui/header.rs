use crate::ui::catalog::CatalogState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Countries of the World";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CatalogState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (indicator, status, status_color) = match state {
            CatalogState::Loading => ("○", "Loading...".to_string(), HEADER_TEXT),
            CatalogState::Ready(catalog) => (
                "●",
                format!(
                    "Showing {} of {} countries",
                    catalog.visible_len(),
                    catalog.dataset().len()
                ),
                STATUS_OK,
            ),
            CatalogState::Failed { .. } => ("●", "Load failed".to_string(), STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(indicator, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
