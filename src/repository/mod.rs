use async_trait::async_trait;

use crate::domain::listing::ListingItem;
use crate::domain::types::CategoryKey;

pub mod errors;
pub mod jikan;
#[cfg(test)]
pub mod test;

pub use errors::{CatalogError, CatalogResult};
pub use jikan::JikanRepository;

/// Read-only access to the upstream anime catalog.
///
/// Implementations issue one outbound request per call and never cache.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Fetch and normalize the listing configured for `category`.
    async fn list_category(&self, category: CategoryKey) -> CatalogResult<Vec<ListingItem>>;
}
