//! Intents for the search controller.

use crate::tmdb::{Movie, ResultPage};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Validated query submitted from the search bar. Always page 1.
    NewSearch {
        query: String,
        language: Option<String>,
        include_adult: Option<bool>,
    },

    /// Pagination asked for a 1-based page of the current query.
    ChangePage { page: u32 },

    /// Search tagged `seq` succeeded.
    Completed { seq: u64, page: ResultPage },

    /// Search tagged `seq` failed. `message` is what the user sees.
    Failed { seq: u64, message: String },

    /// A result card was activated.
    Select { movie: Movie },

    /// Detail overlay closed.
    Dismiss,
}

impl Intent for SearchIntent {}
