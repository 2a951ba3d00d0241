//! State for the search controller.

use crate::tmdb::{Movie, ResultPage, SearchRequest};
use crate::ui::mvi::UiState;

/// Shown for every failed request; the cause only goes to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Fetch status. Loading and errored cannot hold at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search submitted yet.
    #[default]
    Idle,
    /// A request tagged with the current sequence number is outstanding.
    Loading,
    /// The last response had at least one result.
    Loaded,
    /// The last response had zero results.
    Empty,
    /// The last request failed.
    Errored,
}

/// Everything the controller owns.
///
/// `seq` increases by one for every request issued; only the response
/// carrying the latest value is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub(crate) request: Option<SearchRequest>,
    pub(crate) page: Option<ResultPage>,
    pub(crate) phase: SearchPhase,
    pub(crate) selected: Option<Movie>,
    pub(crate) error: Option<String>,
    pub(crate) seq: u64,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn is_errored(&self) -> bool {
        self.phase == SearchPhase::Errored
    }

    /// Parameters of the most recently issued request.
    pub fn request(&self) -> Option<&SearchRequest> {
        self.request.as_ref()
    }

    /// The result page currently rendered, if any.
    pub fn page(&self) -> Option<&ResultPage> {
        self.page.as_ref()
    }

    pub fn movies(&self) -> &[Movie] {
        self.page
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map(|page| page.total_pages).unwrap_or(0)
    }

    /// 1-based page of the current request (1 before any search).
    pub fn current_page(&self) -> u32 {
        self.request.as_ref().map(|request| request.page).unwrap_or(1)
    }

    /// Pagination is only rendered for multi-page results.
    pub fn show_pagination(&self) -> bool {
        self.page.is_some() && self.total_pages() > 1
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    /// User-facing error text while `Errored`.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sequence number of the latest issued request (0 before any).
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// True if a response tagged `seq` would still be applied.
    pub fn is_awaiting(&self, seq: u64) -> bool {
        self.phase == SearchPhase::Loading && self.seq == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        let state = SearchState::default();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(state.movies().is_empty());
        assert_eq!(state.current_page(), 1);
        assert!(!state.show_pagination());
        assert_eq!(state.seq(), 0);
    }

    #[test]
    fn single_page_hides_pagination() {
        let state = SearchState {
            page: Some(ResultPage {
                page: 1,
                results: Vec::new(),
                total_pages: 1,
                total_results: 3,
            }),
            phase: SearchPhase::Loaded,
            ..SearchState::default()
        };
        assert!(!state.show_pagination());
    }

    #[test]
    fn is_awaiting_requires_loading() {
        let state = SearchState {
            phase: SearchPhase::Loaded,
            seq: 4,
            ..SearchState::default()
        };
        assert!(!state.is_awaiting(4));
    }
}
