//! Advisory notifications: non-blocking, auto-dismissed after a fixed time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::ui::theme::{HEADER_TEXT, TOAST_EMPTY_BG, TOAST_WARNING_BG};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// Oldest toasts are dropped beyond this.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Empty query submitted.
    Warning,
    /// Search came back with nothing.
    NoResults,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            expires_at: now + self.ttl,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }
}

/// Stack of toasts anchored to the bottom-left corner of `area`, newest at
/// the bottom.
pub struct ToastStack<'a> {
    queue: &'a ToastQueue,
}

impl<'a> ToastStack<'a> {
    pub fn new(queue: &'a ToastQueue) -> Self {
        Self { queue }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut bottom = area.y + area.height;
        for toast in self.queue.iter().rev() {
            if bottom < area.y + 3 {
                break;
            }
            let width = (toast.message.chars().count() as u16 + 4).min(area.width);
            let rect = Rect {
                x: area.x + 1.min(area.width.saturating_sub(width)),
                y: bottom - 3,
                width,
                height: 3,
            };
            let (bg, fg) = match toast.kind {
                ToastKind::Warning => (TOAST_WARNING_BG, HEADER_TEXT),
                ToastKind::NoResults => (TOAST_EMPTY_BG, Color::Black),
            };
            let style = Style::default().bg(bg).fg(fg);
            Clear.render(rect, buf);
            Paragraph::new(format!(" {}", toast.message))
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style))
                .render(rect, buf);
            bottom -= 3;
        }
    }
}
