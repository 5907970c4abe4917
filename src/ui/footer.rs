use crate::ui::catalog::CatalogState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `(key, action)` pairs shown once the dataset is browsable.
const BROWSE_HINTS: [(&str, &str); 6] = [
    ("Tab", "Focus"),
    ("Space", "Toggle"),
    ("←/→", "Choose"),
    ("↑/↓", "Scroll"),
    ("R", "Reset"),
    ("Q", "Quit"),
];

const QUIT_HINT: [(&str, &str); 1] = [("Q", "Quit")];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CatalogState, area: Rect) -> Paragraph<'static> {
        let hints: &[(&str, &str)] = match state {
            CatalogState::Ready(_) => &BROWSE_HINTS,
            CatalogState::Loading | CatalogState::Failed { .. } => &QUIT_HINT,
        };

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
            }
            spans.push(Span::styled(key.to_string(), Style::default().fg(ACCENT)));
            spans.push(Span::styled(format!(": {action}"), Style::default().fg(MUTED)));
        }

        // Right-align the version inside the borders; widths are in chars, not bytes
        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let inner_width = usize::from(area.width.saturating_sub(2));
        let padding = inner_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, Style::default().fg(MUTED)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
