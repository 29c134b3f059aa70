use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::listing::ListingItem;
use crate::domain::types::CategoryKey;
use crate::repository::{CatalogError, CatalogReader, CatalogResult};

/// Simple in-memory catalog used for unit tests.
///
/// Categories without a configured listing fail with
/// [`CatalogError::UpstreamFetch`], mimicking an upstream 5xx.
#[derive(Default)]
pub struct TestRepository {
    listings: HashMap<CategoryKey, Vec<ListingItem>>,
    malformed: Vec<CategoryKey>,
    calls: Mutex<Vec<CategoryKey>>,
}

impl TestRepository {
    pub fn new(listings: Vec<(CategoryKey, Vec<ListingItem>)>) -> Self {
        Self {
            listings: listings.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_malformed(mut self, category: CategoryKey) -> Self {
        self.malformed.push(category);
        self
    }

    /// Categories requested so far, in call order.
    pub fn calls(&self) -> Vec<CategoryKey> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogReader for TestRepository {
    async fn list_category(&self, category: CategoryKey) -> CatalogResult<Vec<ListingItem>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(category);
        }
        if self.malformed.contains(&category) {
            return Err(CatalogError::MalformedResponse("expected value".into()));
        }
        self.listings
            .get(&category)
            .cloned()
            .ok_or_else(|| CatalogError::UpstreamFetch("503 Service Unavailable".into()))
    }
}
