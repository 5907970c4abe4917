use crate::catalog::{Catalog, ViewFilter};
use crate::ui::app::App;
use crate::ui::card::{card_lines, CARD_HEIGHT};
use crate::ui::catalog::CatalogState;
use crate::ui::controls::ControlPanel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{MUTED, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No countries match the current selection.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.catalog_state();

    frame.render_widget(Header::new().widget(state), regions.header);

    // Controls only take focus once there is data to act on
    let idle = ViewFilter::default();
    let (filter, focus) = match state.catalog() {
        Some(catalog) => (catalog.filter(), Some(app.focus())),
        None => (&idle, None),
    };
    frame.render_widget(ControlPanel::new(filter, focus).widget(), regions.controls);

    frame.render_widget(Clear, regions.body);
    match state {
        CatalogState::Loading => {
            frame.render_widget(
                Paragraph::new(LOADING_TEXT).style(Style::default().fg(MUTED)),
                regions.body,
            );
        }
        CatalogState::Failed { message, details } => {
            let lines = vec![
                Line::styled(
                    format!("Error: {message}"),
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    details.clone(),
                    Style::default().fg(MUTED).add_modifier(Modifier::DIM),
                ),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }),
                regions.body,
            );
        }
        CatalogState::Ready(catalog) => draw_cards(frame, catalog, app.scroll(), regions.body),
    }

    frame.render_widget(
        Footer::new().widget(state, regions.footer),
        regions.footer,
    );
}

/// Render only the cards intersecting the viewport.
fn draw_cards(frame: &mut Frame<'_>, catalog: &Catalog, scroll: usize, area: Rect) {
    if catalog.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(EMPTY_TEXT).style(Style::default().fg(MUTED)),
            area,
        );
        return;
    }

    let first_card = scroll / CARD_HEIGHT;
    let offset = (scroll % CARD_HEIGHT) as u16;
    let cards_needed = usize::from(area.height) / CARD_HEIGHT + 2;

    let lines: Vec<Line<'static>> = catalog
        .visible()
        .skip(first_card)
        .take(cards_needed)
        .flat_map(card_lines)
        .collect();

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}
