//! Wire shapes of the upstream anime catalog (Jikan v4).
//!
//! Only the fields the proxy forwards are declared; everything else in the
//! upstream payload is ignored.

use serde::{Deserialize, Deserializer};

use crate::domain::listing::ListingItem;
use crate::domain::types::{ItemId, TypeConstraintError};

/// Top-level envelope: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct JikanResponse {
    pub data: Vec<JikanAnime>,
}

#[derive(Debug, Deserialize)]
pub struct JikanAnime {
    pub mal_id: i64,
    pub title: String,
    pub images: JikanImages,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub trailer: Option<JikanTrailer>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    pub jpg: JikanImage,
}

#[derive(Debug, Deserialize)]
pub struct JikanImage {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanTrailer {
    #[serde(default)]
    pub url: Option<String>,
}

/// Keeps numeric scores and drops anything else (null, strings, objects).
fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

impl TryFrom<JikanAnime> for ListingItem {
    type Error = TypeConstraintError;

    fn try_from(value: JikanAnime) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ItemId::new(value.mal_id)?,
            title: value.title,
            image: value.images.jpg.image_url.unwrap_or_default(),
            rating: value.score,
            description: value.synopsis.unwrap_or_default(),
            trailer_url: value.trailer.and_then(|t| t.url).unwrap_or_default(),
        })
    }
}
