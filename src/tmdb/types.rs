use serde::{Deserialize, Serialize};

/// Root for poster and backdrop images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Parameters of one outbound search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// 1-based page number.
    pub page: u32,
    pub language: Option<String>,
    pub include_adult: Option<bool>,
}

impl SearchRequest {
    /// First page of `query` with no language or adult filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            language: None,
            include_adult: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// One movie record as returned by `/search/movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Card-sized poster (`w500`).
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_deref().map(|path| image_url("w500", path))
    }

    /// Full-size backdrop shown in the detail overlay.
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| image_url("original", path))
    }

    /// Year part of `release_date` ("2008-07-16" -> "2008").
    pub fn release_year(&self) -> Option<&str> {
        let year = self.release_date.split('-').next()?;
        (year.len() == 4).then_some(year)
    }
}

fn image_url(size: &str, path: &str) -> String {
    format!("{}/{}/{}", IMAGE_BASE_URL, size, path.trim_start_matches('/'))
}

/// One page of results plus pagination metadata, taken verbatim from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl ResultPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
