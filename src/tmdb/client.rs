use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::config::{ApiConfig, SecureString};
use crate::tmdb::error::SearchError;
use crate::tmdb::types::{ResultPage, SearchRequest};

pub struct TmdbClient {
    client: Client,
    base_url: String,
    token: SecureString,
}

impl TmdbClient {
    /// Build a client for `config.base_url` that authenticates with `token`.
    ///
    /// A timeout is only applied when the configuration sets one.
    pub fn new(config: &ApiConfig, token: SecureString) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SearchError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/search/movie` URL for `request`. Optional parameters are omitted
    /// when unset.
    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, SearchError> {
        let raw = format!("{}/search/movie", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| SearchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &request.query);
            pairs.append_pair("page", &request.page.to_string());
            if let Some(language) = &request.language {
                pairs.append_pair("language", language);
            }
            if let Some(include_adult) = request.include_adult {
                pairs.append_pair("include_adult", if include_adult { "true" } else { "false" });
            }
        }

        Ok(url)
    }

    /// One search round trip. No retry on failure.
    pub async fn search(&self, request: &SearchRequest) -> Result<ResultPage, SearchError> {
        let url = self.search_url(request)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(SearchError::Transport)?;
        serde_json::from_slice(&bytes).map_err(SearchError::Decode)
    }
}
