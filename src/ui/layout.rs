use ratatui::layout::Rect;

/// Rows taken by the control panel: two lines of controls plus borders.
pub const CONTROLS_HEIGHT: u16 = 4;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub controls: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let controls_height = CONTROLS_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height)
            .saturating_sub(controls_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let controls = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: controls_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + controls_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + controls_height + footer_height),
    };
    Regions {
        header,
        controls,
        body,
        footer,
    }
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let regions = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.controls.y, 3);
        assert_eq!(regions.body.y, 3 + CONTROLS_HEIGHT);
        assert_eq!(regions.body.height, 24 - 3 - CONTROLS_HEIGHT - 3);
        assert_eq!(regions.footer.y, 21);
    }

    #[test]
    fn tiny_terminal_collapses_body() {
        let regions = layout_regions(Rect::new(0, 0, 80, 5));
        assert_eq!(regions.body.height, 0);
    }
}
