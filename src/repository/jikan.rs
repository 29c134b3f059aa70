use async_trait::async_trait;
use reqwest::{Client, header};

use crate::domain::listing::ListingItem;
use crate::domain::types::CategoryKey;
use crate::dto::jikan::JikanResponse;
use crate::repository::CatalogReader;
use crate::repository::errors::{CatalogError, CatalogResult};

/// Catalog reader backed by the public Jikan API.
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so a
/// single repository is shared by every worker.
#[derive(Clone, Default)]
pub struct JikanRepository {
    client: Client,
}

impl JikanRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and normalize every record of its `data` array.
    pub async fn fetch_listing(&self, url: &str) -> CatalogResult<Vec<ListingItem>> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamFetch(format!(
                "{url} responded with {status}"
            )));
        }

        let body = response.bytes().await?;
        parse_listing(&body)
    }
}

/// Parse an upstream body into normalized listing items, preserving order.
pub fn parse_listing(body: &[u8]) -> CatalogResult<Vec<ListingItem>> {
    let response: JikanResponse = serde_json::from_slice(body)?;
    response
        .data
        .into_iter()
        .map(|anime| ListingItem::try_from(anime).map_err(CatalogError::from))
        .collect()
}

#[async_trait]
impl CatalogReader for JikanRepository {
    async fn list_category(&self, category: CategoryKey) -> CatalogResult<Vec<ListingItem>> {
        log::debug!("Fetching {category} from {}", category.upstream_url());
        self.fetch_listing(category.upstream_url()).await
    }
}
