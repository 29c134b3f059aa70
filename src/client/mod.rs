//! Browser-side half of the application: proxy access and view state.
//!
//! The state is an explicit [`state::AppState`] value updated through its
//! methods; network access goes through the [`ListingSource`] trait so the
//! update logic can be driven without a running proxy.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::domain::listing::ListingItem;
use crate::domain::types::CategoryKey;

pub mod comments;
pub mod state;
pub mod view;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to fetch movies: proxy responded with {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Anything that can produce the listing for a category.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_category(&self, category: CategoryKey) -> ClientResult<Vec<ListingItem>>;
}

/// HTTP client for the movie proxy's `/api/movies/{category}` routes.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn category_url(&self, category: CategoryKey) -> String {
        format!("{}/api/movies/{}", self.base_url, category)
    }
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_URL)
    }
}

#[async_trait]
impl ListingSource for ProxyClient {
    async fn fetch_category(&self, category: CategoryKey) -> ClientResult<Vec<ListingItem>> {
        let response = self.client.get(self.category_url(category)).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
