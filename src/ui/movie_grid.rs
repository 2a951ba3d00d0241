//! Result cards laid out in a grid.
//!
//! Rendering is a pure function of the movies and a [`GridCursor`]; the
//! cursor is the only state and it lives in the App.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::tmdb::Movie;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, RATING_GOLD, TMDB_TEAL,
};

pub const CARD_MIN_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 6;

/// Columns and fully visible rows for a body area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridShape {
    pub fn for_area(area: Rect) -> Self {
        Self {
            columns: (area.width / CARD_MIN_WIDTH).max(1) as usize,
            visible_rows: (area.height / CARD_HEIGHT).max(1) as usize,
        }
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }
}

/// Focused card and first visible row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub focused: usize,
    pub scroll_row: usize,
}

impl GridCursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move focus by whole cells, clamped to `count`, then scroll it into view.
    pub fn move_by(&mut self, dx: isize, dy: isize, count: usize, shape: GridShape) {
        if count == 0 {
            self.reset();
            return;
        }
        let columns = shape.columns as isize;
        let target = self.focused as isize + dx + dy * columns;
        self.focused = target.clamp(0, count as isize - 1) as usize;
        self.ensure_visible(shape);
    }

    pub fn focus(&mut self, index: usize, count: usize, shape: GridShape) {
        if count == 0 {
            self.reset();
            return;
        }
        self.focused = index.min(count - 1);
        self.ensure_visible(shape);
    }

    /// Scroll without moving focus.
    pub fn scroll_by(&mut self, rows: isize, count: usize, shape: GridShape) {
        let max_scroll = shape.rows_for(count).saturating_sub(shape.visible_rows);
        let target = self.scroll_row as isize + rows;
        self.scroll_row = target.clamp(0, max_scroll as isize) as usize;
    }

    fn ensure_visible(&mut self, shape: GridShape) {
        let row = self.focused / shape.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + shape.visible_rows {
            self.scroll_row = row + 1 - shape.visible_rows;
        }
    }
}

/// Visible cards as `(index, rect)` pairs.
pub fn card_rects(area: Rect, count: usize, scroll_row: usize) -> Vec<(usize, Rect)> {
    let shape = GridShape::for_area(area);
    let card_width = area.width / shape.columns as u16;
    let mut rects = Vec::new();

    for visible_row in 0..shape.visible_rows {
        let row = scroll_row + visible_row;
        for column in 0..shape.columns {
            let index = row * shape.columns + column;
            if index >= count {
                return rects;
            }
            let y = area.y + visible_row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min((area.y + area.height).saturating_sub(y));
            if height == 0 {
                return rects;
            }
            rects.push((
                index,
                Rect {
                    x: area.x + column as u16 * card_width,
                    y,
                    width: card_width,
                    height,
                },
            ));
        }
    }
    rects
}

/// Index of the card under `(column, row)`.
pub fn hit_test(
    area: Rect,
    count: usize,
    scroll_row: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    card_rects(area, count, scroll_row)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(index, _)| index)
}

pub struct MovieGrid<'a> {
    movies: &'a [Movie],
    cursor: GridCursor,
    focused: bool,
}

impl<'a> MovieGrid<'a> {
    pub fn new(movies: &'a [Movie], cursor: GridCursor, focused: bool) -> Self {
        Self {
            movies,
            cursor,
            focused,
        }
    }
}

impl Widget for MovieGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, rect) in card_rects(area, self.movies.len(), self.cursor.scroll_row) {
            let movie = &self.movies[index];
            let highlighted = self.focused && index == self.cursor.focused;
            render_card(movie, highlighted, rect, buf);
        }
    }
}

fn render_card(movie: &Movie, highlighted: bool, area: Rect, buf: &mut Buffer) {
    let (border, background) = if highlighted {
        (TMDB_TEAL, Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        (GLOBAL_BORDER, Style::default())
    };

    let poster = if movie.poster_path.is_some() {
        Span::styled("▣ poster", Style::default().fg(HEADER_SEPARATOR))
    } else {
        Span::styled("□ no poster", Style::default().fg(HEADER_SEPARATOR))
    };
    let year = movie.release_year().unwrap_or("----");
    let lines = vec![
        Line::from(Span::styled(
            movie.title.as_str(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(year, Style::default().fg(HEADER_SEPARATOR)),
            Span::raw("  "),
            Span::styled(
                format!("★ {:.1}", movie.vote_average),
                Style::default().fg(RATING_GOLD),
            ),
        ]),
        Line::from(poster),
    ];

    Paragraph::new(lines)
        .style(background)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .render(area, buf);
}
