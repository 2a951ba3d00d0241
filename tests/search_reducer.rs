//! Search controller state machine: request sequencing, paging, selection.

mod common;

use common::*;
use moviefinder::ui::mvi::Reducer;
use moviefinder::ui::search::{
    SearchIntent, SearchPhase, SearchReducer, SearchState, GENERIC_ERROR_MESSAGE,
};

fn reduce(state: SearchState, intent: SearchIntent) -> SearchState {
    SearchReducer::reduce(state, intent)
}

fn new_search(query: &str) -> SearchIntent {
    SearchIntent::NewSearch {
        query: query.to_string(),
        language: None,
        include_adult: None,
    }
}

fn loaded(query: &str, total_pages: u32) -> SearchState {
    let state = reduce(SearchState::default(), new_search(query));
    let seq = state.seq();
    reduce(
        state,
        SearchIntent::Completed {
            seq,
            page: result_page(query, 20, 1, total_pages),
        },
    )
}

// -- New searches --------------------------------------------------------------

#[test]
fn new_search_starts_loading_page_one() {
    let state = reduce(SearchState::default(), new_search("batman"));

    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(state.seq(), 1);
    let request = state.request().expect("request recorded");
    assert_eq!(request.query, "batman");
    assert_eq!(request.page, 1);
    assert!(state.page().is_none());
}

#[test]
fn batman_response_shows_results_and_pagination() {
    let state = loaded("batman", 5);

    assert_eq!(state.phase(), SearchPhase::Loaded);
    assert_eq!(state.movies().len(), 20);
    assert_eq!(state.total_pages(), 5);
    assert_eq!(state.current_page(), 1);
    assert!(state.show_pagination());
    assert!(!state.is_loading());
}

#[test]
fn zero_results_hide_grid_and_pagination() {
    let state = reduce(SearchState::default(), new_search("zzqqxx"));
    let seq = state.seq();
    let state = reduce(
        state,
        SearchIntent::Completed {
            seq,
            page: empty_page(),
        },
    );

    assert_eq!(state.phase(), SearchPhase::Empty);
    assert!(state.movies().is_empty());
    assert!(!state.show_pagination());
}

#[test]
fn single_page_hides_pagination() {
    let state = loaded("heat", 1);
    assert_eq!(state.movies().len(), 20);
    assert!(!state.show_pagination());
}

#[test]
fn new_search_resets_page_to_one() {
    let state = loaded("batman", 5);
    let state = reduce(state, SearchIntent::ChangePage { page: 4 });
    let state = reduce(state, new_search("superman"));

    let request = state.request().unwrap();
    assert_eq!(request.query, "superman");
    assert_eq!(request.page, 1);
}

// -- Stale responses -------------------------------------------------------------

#[test]
fn stale_completion_is_ignored() {
    let state = reduce(SearchState::default(), new_search("bat"));
    let first = state.seq();
    let state = reduce(state, new_search("batman"));
    let second = state.seq();

    let state = reduce(
        state,
        SearchIntent::Completed {
            seq: first,
            page: result_page("bat", 3, 1, 1),
        },
    );
    assert!(state.is_loading());
    assert!(state.movies().is_empty());

    let state = reduce(
        state,
        SearchIntent::Completed {
            seq: second,
            page: result_page("batman", 20, 1, 5),
        },
    );
    assert_eq!(state.movies()[0].title, "batman 0");
}

#[test]
fn stale_failure_is_ignored() {
    let state = reduce(SearchState::default(), new_search("bat"));
    let first = state.seq();
    let state = reduce(state, new_search("batman"));

    let state = reduce(
        state,
        SearchIntent::Failed {
            seq: first,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        },
    );
    assert!(state.is_loading());
    assert!(!state.is_errored());
}

#[test]
fn duplicate_completion_is_ignored() {
    let state = loaded("batman", 5);
    let seq = state.seq();
    let before = state.clone();
    let state = reduce(
        state,
        SearchIntent::Completed {
            seq,
            page: result_page("other", 2, 1, 1),
        },
    );
    assert_eq!(state, before);
}

// -- Paging ------------------------------------------------------------------------

#[test]
fn change_page_keeps_query_and_increments_seq() {
    let state = loaded("batman", 5);
    let seq = state.seq();
    let state = reduce(state, SearchIntent::ChangePage { page: 3 });

    assert!(state.is_loading());
    assert_eq!(state.seq(), seq + 1);
    let request = state.request().unwrap();
    assert_eq!(request.query, "batman");
    assert_eq!(request.page, 3);
    // Old results stay visible while the new page loads.
    assert_eq!(state.movies().len(), 20);
}

#[test]
fn change_page_to_current_reissues_same_request() {
    let state = loaded("batman", 5);
    let before = state.request().cloned();
    let seq = state.seq();
    let state = reduce(state, SearchIntent::ChangePage { page: 1 });

    assert_eq!(state.seq(), seq + 1);
    assert_eq!(state.request().cloned(), before);
    assert_eq!(state.movies().len(), 20);
}

#[test]
fn change_page_out_of_range_is_ignored() {
    let state = loaded("batman", 5);
    let before = state.clone();

    assert_eq!(reduce(state.clone(), SearchIntent::ChangePage { page: 0 }), before);
    assert_eq!(reduce(state, SearchIntent::ChangePage { page: 6 }), before);
}

#[test]
fn change_page_before_any_results_is_ignored() {
    let state = SearchState::default();
    assert_eq!(
        reduce(state.clone(), SearchIntent::ChangePage { page: 2 }),
        state
    );
}

#[test]
fn change_page_on_single_page_is_ignored() {
    let state = loaded("heat", 1);
    let before = state.clone();
    assert_eq!(reduce(state, SearchIntent::ChangePage { page: 1 }), before);
}

#[test]
fn page_response_updates_current_page() {
    let state = loaded("batman", 5);
    let state = reduce(state, SearchIntent::ChangePage { page: 3 });
    let seq = state.seq();
    let state = reduce(
        state,
        SearchIntent::Completed {
            seq,
            page: result_page("batman p3", 20, 3, 5),
        },
    );

    assert_eq!(state.current_page(), 3);
    assert_eq!(state.movies()[0].title, "batman p3 0");
}

// -- Failures ---------------------------------------------------------------------

#[test]
fn failure_clears_loading_and_keeps_previous_page() {
    let state = loaded("batman", 5);
    let state = reduce(state, SearchIntent::ChangePage { page: 2 });
    let seq = state.seq();
    let state = reduce(
        state,
        SearchIntent::Failed {
            seq,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        },
    );

    assert!(state.is_errored());
    assert!(!state.is_loading());
    assert_eq!(state.error_message(), Some(GENERIC_ERROR_MESSAGE));
    assert_eq!(state.movies().len(), 20);
}

#[test]
fn new_search_clears_error() {
    let state = reduce(SearchState::default(), new_search("batman"));
    let seq = state.seq();
    let state = reduce(
        state,
        SearchIntent::Failed {
            seq,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        },
    );
    let state = reduce(state, new_search("batman"));

    assert!(state.is_loading());
    assert_eq!(state.error_message(), None);
}

// -- Selection ---------------------------------------------------------------------

#[test]
fn select_and_dismiss() {
    let state = loaded("batman", 5);
    let movie = state.movies()[2].clone();

    let state = reduce(
        state,
        SearchIntent::Select {
            movie: movie.clone(),
        },
    );
    assert_eq!(state.selected(), Some(&movie));

    let state = reduce(state, SearchIntent::Dismiss);
    assert_eq!(state.selected(), None);
}
