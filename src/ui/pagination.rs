//! Page indicator row.
//!
//! Purely derived from `(total_pages, selected)`. Indices are zero-based
//! here; the App adds one before handing a page to the controller.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, TMDB_TEAL};

/// Pages shown around the selected one.
pub const PAGE_RANGE_DISPLAYED: usize = 5;
/// Pages always shown at each end.
pub const MARGIN_PAGES_DISPLAYED: usize = 1;

const GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous,
    Page(usize),
    Break,
    Next,
}

impl PageItem {
    pub fn label(&self) -> String {
        match self {
            PageItem::Previous => "←".to_string(),
            PageItem::Page(index) => format!(" {} ", index + 1),
            PageItem::Break => "…".to_string(),
            PageItem::Next => "→".to_string(),
        }
    }

    /// Zero-based page this item navigates to, if any.
    pub fn target(&self, selected: usize, total_pages: usize) -> Option<usize> {
        match self {
            PageItem::Previous => selected.checked_sub(1),
            PageItem::Next => (selected + 1 < total_pages).then_some(selected + 1),
            PageItem::Page(index) if *index != selected => Some(*index),
            PageItem::Page(_) | PageItem::Break => None,
        }
    }
}

/// Items for `total_pages` pages with `selected` active.
///
/// Every page is listed when they all fit in the window; otherwise the
/// window slides with the selection and gaps collapse into a single break.
pub fn page_items(total_pages: usize, selected: usize) -> Vec<PageItem> {
    windowed_items(
        total_pages,
        selected,
        PAGE_RANGE_DISPLAYED,
        MARGIN_PAGES_DISPLAYED,
    )
}

/// Like [`page_items`], narrowed until the row fits `width` cells.
///
/// Margin pages go first, then the window shrinks toward the selected
/// page. Previous and Next are never dropped.
pub fn fitted_items(total_pages: usize, selected: usize, width: u16) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    for range in (1..=PAGE_RANGE_DISPLAYED).rev() {
        for margin in [MARGIN_PAGES_DISPLAYED, 0] {
            let items = windowed_items(total_pages, selected, range, margin);
            if row_width(&items) <= width {
                return items;
            }
        }
    }
    vec![
        PageItem::Previous,
        PageItem::Page(selected.min(total_pages - 1)),
        PageItem::Next,
    ]
}

fn windowed_items(
    total_pages: usize,
    selected: usize,
    range: usize,
    margin: usize,
) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let selected = selected.min(total_pages - 1);
    let mut items = vec![PageItem::Previous];

    if total_pages <= range {
        items.extend((0..total_pages).map(PageItem::Page));
    } else {
        let end = (selected.saturating_sub(range / 2) + range).min(total_pages);
        let start = end - range;

        for index in 0..total_pages {
            let in_margin = index < margin || index >= total_pages - margin;
            if in_margin || (start..end).contains(&index) {
                items.push(PageItem::Page(index));
            } else if items.last() != Some(&PageItem::Break) {
                items.push(PageItem::Break);
            }
        }
    }

    items.push(PageItem::Next);
    items
}

fn label_width(item: &PageItem) -> u16 {
    item.label().chars().count() as u16
}

fn row_width(items: &[PageItem]) -> u16 {
    items.iter().map(label_width).sum::<u16>() + GAP * items.len().saturating_sub(1) as u16
}

/// Screen rectangles of each item, centred horizontally in `area`.
pub fn item_rects(area: Rect, items: &[PageItem]) -> Vec<(PageItem, Rect)> {
    let mut x = area.x + area.width.saturating_sub(row_width(items)) / 2;
    let right = area.x + area.width;

    let mut rects = Vec::with_capacity(items.len());
    for item in items {
        let width = label_width(item);
        if x + width > right {
            break;
        }
        rects.push((
            *item,
            Rect {
                x,
                y: area.y,
                width,
                height: area.height.min(1),
            },
        ));
        x += width + GAP;
    }
    rects
}

/// Zero-based page targeted by a click at `(column, row)`.
pub fn hit_test(
    area: Rect,
    total_pages: usize,
    selected: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let items = fitted_items(total_pages, selected, area.width);
    item_rects(area, &items)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .and_then(|(item, _)| item.target(selected, total_pages))
}

pub struct Pagination {
    total_pages: usize,
    selected: usize,
}

impl Pagination {
    pub fn new(total_pages: usize, selected: usize) -> Self {
        Self {
            total_pages,
            selected,
        }
    }
}

impl Widget for Pagination {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.total_pages <= 1 || area.height == 0 {
            return;
        }
        let items = fitted_items(self.total_pages, self.selected, area.width);
        for (item, rect) in item_rects(area, &items) {
            let style = match item {
                PageItem::Page(index) if index == self.selected => Style::default()
                    .fg(TMDB_TEAL)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
                PageItem::Break => Style::default().fg(HEADER_SEPARATOR),
                PageItem::Previous if self.selected == 0 => Style::default().fg(HEADER_SEPARATOR),
                PageItem::Next if self.selected + 1 >= self.total_pages => {
                    Style::default().fg(HEADER_SEPARATOR)
                }
                _ => Style::default().fg(HEADER_TEXT),
            };
            buf.set_string(rect.x, rect.y, item.label(), style);
        }
    }
}
