use crate::config::Config;
use crate::tmdb::{ResultPage, SearchError, SearchRequest};
use crate::ui::layout::{header_regions, layout_regions, Regions};
use crate::ui::movie_grid::{self, GridCursor, GridShape};
use crate::ui::movie_modal::{self, OverlayHit};
use crate::ui::mvi::Reducer;
use crate::ui::pagination;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState, GENERIC_ERROR_MESSAGE};
use crate::ui::search_bar::{SearchBar, ValidationError};
use crate::ui::toast::{ToastKind, ToastQueue, EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    SearchBar,
    Grid,
}

/// Whether the result grid may scroll. Locked exactly while the detail
/// overlay is mounted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollMode {
    #[default]
    Auto,
    Locked,
}

#[derive(Debug)]
pub enum UiCommand {
    Search { seq: u64, request: SearchRequest },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Filters attached to every new search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDefaults {
    pub language: Option<String>,
    pub include_adult: Option<bool>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Search controller state (MVI pattern).
    search: SearchState,
    search_bar: SearchBar,
    grid: GridCursor,
    scroll: ScrollMode,
    toasts: ToastQueue,
    defaults: SearchDefaults,
    command_sender: Option<UiCommandSender>,
    animation_tick: u8,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::SearchBar,
            size: None,
            search: SearchState::default(),
            search_bar: SearchBar::new(),
            grid: GridCursor::default(),
            scroll: ScrollMode::Auto,
            toasts: ToastQueue::new(config.ui.toast_duration()),
            defaults: SearchDefaults {
                language: config.api.language.clone(),
                include_adult: config.api.include_adult,
            },
            command_sender: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn grid_cursor(&self) -> GridCursor {
        self.grid
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// True while the detail overlay is mounted.
    pub fn overlay_open(&self) -> bool {
        self.search.selected().is_some()
    }

    /// Zero-based index of the page on screen.
    pub fn current_page_index(&self) -> usize {
        self.search.current_page().saturating_sub(1) as usize
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        self.toasts.prune();
        if self.search.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let count = self.search.movies().len();
        let shape = self.grid_shape();
        self.grid.focus(self.grid.focused, count, shape);
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.overlay_open() || self.focus != Focus::SearchBar {
            return;
        }
        self.search_bar.insert_str(text);
    }

    // ========================================================================
    // Search input
    // ========================================================================

    /// Validate the search bar and start a new search.
    ///
    /// Blank input only produces an advisory notification.
    pub fn submit_search(&mut self) {
        match self.search_bar.submit() {
            Err(ValidationError::EmptyQuery) => {
                debug!("rejected empty search query");
                self.toasts.push(ToastKind::Warning, EMPTY_QUERY_MESSAGE);
            }
            Ok(query) => {
                self.grid.reset();
                self.dispatch_search(SearchIntent::NewSearch {
                    query,
                    language: self.defaults.language.clone(),
                    include_adult: self.defaults.include_adult,
                });
            }
        }
    }

    /// Fill the search bar with `query` and submit it.
    pub fn search_for(&mut self, query: &str) {
        self.search_bar.set_text(query);
        self.submit_search();
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Handle a zero-based page index from the pagination control.
    pub fn change_page(&mut self, selected: usize) {
        let page = u32::try_from(selected + 1).unwrap_or(u32::MAX);
        self.dispatch_search(SearchIntent::ChangePage { page });
    }

    pub fn next_page(&mut self) {
        if !self.search.show_pagination() {
            return;
        }
        let current = self.current_page_index();
        if current + 1 < self.search.total_pages() as usize {
            self.change_page(current + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if !self.search.show_pagination() {
            return;
        }
        if let Some(previous) = self.current_page_index().checked_sub(1) {
            self.change_page(previous);
        }
    }

    // ========================================================================
    // Search responses
    // ========================================================================

    /// Apply the outcome of the request tagged `seq`.
    ///
    /// Anything but the latest request is dropped.
    pub fn on_search_finished(&mut self, seq: u64, outcome: Result<ResultPage, SearchError>) {
        if !self.search.is_awaiting(seq) {
            debug!(seq, latest = self.search.seq(), "discarding stale search response");
            return;
        }

        match outcome {
            Ok(page) => {
                let empty = page.is_empty();
                info!(
                    seq,
                    page = page.page,
                    results = page.results.len(),
                    total_pages = page.total_pages,
                    total_results = page.total_results,
                    "search completed"
                );
                self.grid.reset();
                self.dispatch_search(SearchIntent::Completed { seq, page });
                if empty {
                    self.toasts.push(ToastKind::NoResults, NO_RESULTS_MESSAGE);
                }
            }
            Err(err) => {
                warn!(seq, error_type = err.error_type(), error = %err, "search failed");
                self.dispatch_search(SearchIntent::Failed {
                    seq,
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    // ========================================================================
    // Result grid and detail overlay
    // ========================================================================

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        if self.scroll == ScrollMode::Locked {
            return;
        }
        let count = self.search.movies().len();
        let shape = self.grid_shape();
        self.grid.move_by(dx, dy, count, shape);
    }

    pub fn scroll_grid(&mut self, rows: isize) {
        if self.scroll == ScrollMode::Locked {
            return;
        }
        let count = self.search.movies().len();
        let shape = self.grid_shape();
        self.grid.scroll_by(rows, count, shape);
    }

    pub fn select_focused(&mut self) {
        let Some(movie) = self.search.movies().get(self.grid.focused).cloned() else {
            return;
        };
        self.dispatch_search(SearchIntent::Select { movie });
    }

    pub fn select_at(&mut self, index: usize) {
        let count = self.search.movies().len();
        if index >= count {
            return;
        }
        let shape = self.grid_shape();
        self.grid.focus(index, count, shape);
        self.select_focused();
    }

    /// Close the detail overlay. A no-op when nothing is open.
    pub fn dismiss(&mut self) {
        if self.overlay_open() {
            self.dispatch_search(SearchIntent::Dismiss);
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.screen_area() else {
            return;
        };

        if self.overlay_open() {
            match movie_modal::hit_test(area, column, row) {
                OverlayHit::CloseButton | OverlayHit::Backdrop => self.dismiss(),
                OverlayHit::Content => {}
            }
            return;
        }

        let regions = layout_regions(area, self.search.show_pagination());
        let position = Position::new(column, row);

        if regions.header.contains(position) {
            let header = header_regions(regions.header);
            if header.button.contains(position) {
                self.focus = Focus::SearchBar;
                self.submit_search();
            } else if header.input.contains(position) {
                self.focus = Focus::SearchBar;
            }
        } else if regions.pagination.contains(position) {
            let total_pages = self.search.total_pages() as usize;
            let selected = self.current_page_index();
            if let Some(target) =
                pagination::hit_test(regions.pagination, total_pages, selected, column, row)
            {
                self.change_page(target);
            }
        } else if regions.body.contains(position) {
            let count = self.search.movies().len();
            if let Some(index) =
                movie_grid::hit_test(regions.body, count, self.grid.scroll_row, column, row)
            {
                self.focus = Focus::Grid;
                self.select_at(index);
            }
        }
    }

    pub fn screen_area(&self) -> Option<Rect> {
        self.size.map(|(cols, rows)| Rect::new(0, 0, cols, rows))
    }

    pub fn regions(&self) -> Option<Regions> {
        self.screen_area()
            .map(|area| layout_regions(area, self.search.show_pagination()))
    }

    fn grid_shape(&self) -> GridShape {
        let body = self
            .regions()
            .map(|regions| regions.body)
            .unwrap_or_else(|| Rect::new(0, 0, 80, 24));
        GridShape::for_area(body)
    }

    // ========================================================================
    // Search controller (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the search reducer and issue any new request.
    fn dispatch_search(&mut self, intent: SearchIntent) {
        let before = self.search.seq();
        dispatch_mvi!(self, search, SearchReducer, intent);
        self.sync_overlay();
        if self.search.seq() != before {
            self.issue_current_request();
        }
    }

    fn issue_current_request(&mut self) {
        let seq = self.search.seq();
        let Some(request) = self.search.request().cloned() else {
            return;
        };
        debug!(seq, page = request.page, "queueing search");
        if !self.send_command(UiCommand::Search { seq, request }) {
            dispatch_mvi!(
                self,
                search,
                SearchReducer,
                SearchIntent::Failed {
                    seq,
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                }
            );
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            warn!("no search worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to queue search");
                false
            }
        }
    }

    /// Scroll is locked while the overlay is mounted and restored to `Auto`
    /// whenever it is not.
    fn sync_overlay(&mut self) {
        self.scroll = if self.search.selected().is_some() {
            ScrollMode::Locked
        } else {
            ScrollMode::Auto
        };
    }
}
