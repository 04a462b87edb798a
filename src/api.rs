// Trivia API client.
//
// Two endpoints are consumed:
//   GET {base}/categories?count=<n>  -> [{ "id": .. , ... }, ...]
//   GET {base}/category?id=<id>      -> { "title": .., "clues": [{question, answer}, ..] }
//
// `load_board` runs the full loading sequence: one id-list request, then one
// detail request per id, strictly sequential. Failures are typed; the session
// controller decides how to present them.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::Category;
use crate::config::ApiConfig;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no usable categories were retrieved")]
    EmptyBoard,
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// One entry of the category listing. The API returns more fields
/// (title, clue counts); only the id is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
}

/// Full detail response for a single category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClueDetail {
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// HTTP client for the trivia API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the API section of the config.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(FetchError::Client)?;
        Ok(ApiClient {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the ordered list of available category ids.
    pub async fn fetch_category_ids(&self, count: usize) -> Result<Vec<u64>, FetchError> {
        let url = format!("{}/categories?count={}", self.base_url, count);
        let summaries: Vec<CategorySummary> = self.get_json(&url).await?;
        debug!(count = summaries.len(), "fetched category ids");
        Ok(summaries.into_iter().map(|c| c.id).collect())
    }

    /// Fetch the full clue content of a single category.
    pub async fn fetch_category(&self, id: u64) -> Result<CategoryDetail, FetchError> {
        let url = format!("{}/category?id={}", self.base_url, id);
        let detail: CategoryDetail = self.get_json(&url).await?;
        debug!(id, title = %detail.title, clues = detail.clues.len(), "fetched category");
        Ok(detail)
    }

    /// Run the full board-loading sequence: fetch ids, then fetch each
    /// category one at a time in id order, each request awaited before the
    /// next begins.
    ///
    /// A category that fails to fetch, or that carries fewer than
    /// `clues_per_category` clues, contributes nothing to the board and is
    /// logged at warn level. An id-list failure, or an outcome with zero
    /// usable categories, is an error.
    pub async fn load_board(
        &self,
        columns: usize,
        clues_per_category: usize,
    ) -> Result<Vec<Category>, FetchError> {
        let ids = self.fetch_category_ids(columns).await?;

        let mut categories = Vec::with_capacity(ids.len());
        for id in ids {
            match self.fetch_category(id).await {
                Ok(detail) => match Category::from_detail(detail, clues_per_category) {
                    Some(category) => categories.push(category),
                    None => {
                        warn!(
                            id,
                            clues_per_category, "skipping category with too few clues"
                        );
                    }
                },
                Err(e) => {
                    warn!(id, error = %e, "skipping category after fetch failure");
                }
            }
        }

        if categories.is_empty() {
            return Err(FetchError::EmptyBoard);
        }
        Ok(categories)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
