use crate::ui::layout::header_regions;
use crate::ui::search_bar::SearchBar;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, TMDB_TEAL};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const BRAND: &str = "Powered by TMDB";

pub struct Header<'a> {
    search_bar: &'a SearchBar,
    focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(search_bar: &'a SearchBar, focused: bool) -> Self {
        Self {
            search_bar,
            focused,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let regions = header_regions(area);
        let border = Style::default().fg(GLOBAL_BORDER);

        let brand = Paragraph::new(Line::from(Span::styled(
            BRAND,
            Style::default().fg(TMDB_TEAL).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(brand, regions.brand);

        let inner_width = regions.input.width.saturating_sub(2);
        frame.render_widget(
            self.search_bar.widget(self.focused, inner_width),
            regions.input,
        );

        let button = Paragraph::new(Line::from(Span::styled(
            "Search",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(button, regions.button);

        if self.focused && regions.input.width > 2 && regions.input.height > 2 {
            let column = self
                .search_bar
                .viewport(inner_width)
                .cursor_column
                .min(inner_width.saturating_sub(1));
            let x = regions.input.x + 1 + column;
            frame.set_cursor_position((x, regions.input.y + 1));
        }
    }
}
