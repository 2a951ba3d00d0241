//! TMDB search API client.
//!
//! One HTTP GET per search or page request. The bearer credential is handed
//! to [`TmdbClient::new`]; failures surface as [`SearchError`] with no retry.

mod client;
mod error;
mod types;

pub use client::TmdbClient;
pub use error::SearchError;
pub use types::{Movie, ResultPage, SearchRequest, IMAGE_BASE_URL};
