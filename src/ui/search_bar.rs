//! Free-text search input.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use thiserror::Error;

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TMDB_TEAL};

pub const PLACEHOLDER: &str = "Search movies...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your search query.")]
    EmptyQuery,
}

/// Visible slice of the search buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Byte offset of the first visible char.
    pub start: usize,
    /// Cursor cell relative to the left edge of the input.
    pub cursor_column: u16,
}

/// Single-line text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    buffer: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = single_line(text);
        self.cursor = self.buffer.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        let offset = self.byte_offset();
        self.buffer.insert(offset, ch);
        self.cursor += 1;
    }

    /// Paste: line breaks are dropped so the query stays on one line.
    pub fn insert_str(&mut self, text: &str) {
        let text = single_line(text);
        let offset = self.byte_offset();
        self.buffer.insert_str(offset, &text);
        self.cursor += text.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset();
        self.buffer.remove(offset);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.chars().count() {
            return;
        }
        let offset = self.byte_offset();
        self.buffer.remove(offset);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Validate the buffer for submission.
    ///
    /// Whitespace-only input is rejected. Accepted queries are returned
    /// exactly as typed.
    pub fn submit(&self) -> Result<String, ValidationError> {
        if self.buffer.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(self.buffer.clone())
    }

    /// Horizontal window onto the buffer for an input `width` cells wide.
    ///
    /// Scrolls just far enough that the cursor keeps a free cell on its
    /// right. Widths are measured in terminal cells, not chars.
    pub fn viewport(&self, width: u16) -> Viewport {
        let before = &self.buffer[..self.byte_offset()];
        let limit = usize::from(width.saturating_sub(1));
        let mut start = 0;
        let mut column = display_width(before);
        for (idx, ch) in before.char_indices() {
            if column <= limit {
                break;
            }
            start = idx + ch.len_utf8();
            column = display_width(&before[start..]);
        }
        Viewport {
            start,
            cursor_column: column as u16,
        }
    }

    /// Bordered input showing the part of the buffer that fits `width`
    /// inner cells.
    pub fn widget(&self, focused: bool, width: u16) -> Paragraph<'_> {
        let border = if focused { TMDB_TEAL } else { GLOBAL_BORDER };
        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(HEADER_SEPARATOR)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                &self.buffer[self.viewport(width).start..],
                Style::default().fg(HEADER_TEXT),
            ))
        };

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    fn byte_offset(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.buffer.len())
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|ch| *ch != '\n' && *ch != '\r').collect()
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}
