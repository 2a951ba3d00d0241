//! Detail overlay for the selected movie.
//!
//! Rendered last, over a cleared area, so nothing in the layout clips it.
//! Mouse clicks are classified by [`hit_test`]; the App turns close-button
//! and backdrop hits into a single dismiss.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::tmdb::Movie;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, RATING_GOLD, STATUS_ERROR, TMDB_TEAL,
};

pub const CLOSE_LABEL: &str = "[x]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    CloseButton,
    Content,
    Backdrop,
}

pub fn modal_rect(area: Rect) -> Rect {
    centered_rect(70, 70, area)
}

/// The close label sits on the top border, right-aligned.
pub fn close_button_rect(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect {
        x: (modal.x + modal.width).saturating_sub(width + 1).max(modal.x),
        y: modal.y,
        width: width.min(modal.width),
        height: modal.height.min(1),
    }
}

pub fn hit_test(area: Rect, column: u16, row: u16) -> OverlayHit {
    let modal = modal_rect(area);
    let position = Position::new(column, row);
    if close_button_rect(modal).contains(position) {
        OverlayHit::CloseButton
    } else if modal.contains(position) {
        OverlayHit::Content
    } else {
        OverlayHit::Backdrop
    }
}

pub fn render_movie_modal(frame: &mut Frame, movie: &Movie) {
    let area = modal_rect(frame.area());
    frame.render_widget(Clear, area);

    let label = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let value = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::new();
    if movie.overview.is_empty() {
        lines.push(Line::from(Span::styled(
            "No overview available.",
            Style::default().fg(HEADER_SEPARATOR),
        )));
    } else {
        lines.push(Line::from(Span::styled(movie.overview.as_str(), value)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Release Date: ", label),
        Span::styled(movie.release_date.as_str(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Rating: ", label),
        Span::styled(
            format!("{}", movie.vote_average),
            Style::default().fg(RATING_GOLD),
        ),
    ]));
    if let Some(url) = movie.backdrop_url() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Backdrop: ", label),
            Span::styled(url, Style::default().fg(TMDB_TEAL)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc / x / click outside: close",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", movie.title),
            Style::default().fg(TMDB_TEAL).add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(Span::styled(CLOSE_LABEL, Style::default().fg(STATUS_ERROR))).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}
