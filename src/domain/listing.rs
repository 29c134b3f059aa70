use serde::{Deserialize, Serialize};

use crate::domain::types::ItemId;

/// Normalized catalog record served by the proxy and rendered by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    /// Upstream score. `None` when the catalog has no score for the item.
    pub rating: Option<f64>,
    /// Empty when the catalog has no synopsis.
    pub description: String,
    /// Empty when the catalog has no trailer.
    pub trailer_url: String,
}
