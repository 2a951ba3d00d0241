//! Reducer for the search controller.

use crate::tmdb::SearchRequest;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchPhase, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::NewSearch {
                query,
                language,
                include_adult,
            } => SearchState {
                request: Some(SearchRequest {
                    query,
                    page: 1,
                    language,
                    include_adult,
                }),
                page: None,
                phase: SearchPhase::Loading,
                error: None,
                seq: state.seq + 1,
                ..state
            },

            SearchIntent::ChangePage { page } => {
                let total_pages = state.total_pages();
                if state.page.is_none() || total_pages <= 1 || page == 0 || page > total_pages {
                    return state;
                }
                let Some(request) = state.request.clone() else {
                    return state;
                };
                // Previous page stays on screen until the new one lands.
                SearchState {
                    request: Some(request.with_page(page)),
                    phase: SearchPhase::Loading,
                    error: None,
                    seq: state.seq + 1,
                    ..state
                }
            }

            SearchIntent::Completed { seq, page } => {
                if !state.is_awaiting(seq) {
                    return state;
                }
                if page.is_empty() {
                    return SearchState {
                        page: None,
                        phase: SearchPhase::Empty,
                        ..state
                    };
                }
                // The API clamps out-of-range pages; follow what it returned.
                let request = state
                    .request
                    .map(|request| request.with_page(page.page.max(1)));
                SearchState {
                    request,
                    page: Some(page),
                    phase: SearchPhase::Loaded,
                    ..state
                }
            }

            SearchIntent::Failed { seq, message } => {
                if !state.is_awaiting(seq) {
                    return state;
                }
                SearchState {
                    phase: SearchPhase::Errored,
                    error: Some(message),
                    ..state
                }
            }

            SearchIntent::Select { movie } => SearchState {
                selected: Some(movie),
                ..state
            },

            SearchIntent::Dismiss => SearchState {
                selected: None,
                ..state
            },
        }
    }
}
