use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    /// Zero height when pagination is hidden.
    pub pagination: Rect,
    /// Loader / error / page summary line.
    pub status: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, show_pagination: bool) -> Regions {
    let [header, pagination, status, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(u16::from(show_pagination)),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    Regions {
        header,
        pagination,
        status,
        body,
        footer,
    }
}

/// Header split: brand label, input, search button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRegions {
    pub brand: Rect,
    pub input: Rect,
    pub button: Rect,
}

pub const BRAND_WIDTH: u16 = 20;
pub const BUTTON_WIDTH: u16 = 12;

pub fn header_regions(header: Rect) -> HeaderRegions {
    let [brand, input, button] = Layout::horizontal([
        Constraint::Length(BRAND_WIDTH),
        Constraint::Min(1),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(header);

    HeaderRegions {
        brand,
        input,
        button,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
