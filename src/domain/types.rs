//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers, category keys and comment text are validated once at the
//! boundary so that the rest of the crate can rely on their invariants.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// The value is not one of the configured category keys.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(
    ItemId,
    "Catalog identifier of a listing item (the upstream `mal_id`).",
    "item_id"
);
id_newtype!(
    CommentId,
    "Timestamp-derived identifier of a comment or reply.",
    "comment_id"
);

/// Trimmed, non-empty text of a comment or reply.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CommentText(String);

impl CommentText {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "comment").map(Self)
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CommentText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CommentText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&str> for CommentText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Category keys served by the proxy.
///
/// Each key maps to exactly one upstream catalog query. The mapping is a
/// `match`, so adding a key without a URL does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    WatchGuide,
    FanFavorites,
    TopPicks,
    MostPopular,
    #[serde(rename = "2005-winter")]
    Winter2005,
    SundaySchedule,
    Upcoming,
}

impl CategoryKey {
    /// Every routed category, in registration order.
    pub const ALL: [CategoryKey; 7] = [
        CategoryKey::WatchGuide,
        CategoryKey::FanFavorites,
        CategoryKey::TopPicks,
        CategoryKey::MostPopular,
        CategoryKey::Winter2005,
        CategoryKey::SundaySchedule,
        CategoryKey::Upcoming,
    ];

    /// The key as it appears in `/api/movies/<key>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryKey::WatchGuide => "watch-guide",
            CategoryKey::FanFavorites => "fan-favorites",
            CategoryKey::TopPicks => "top-picks",
            CategoryKey::MostPopular => "most-popular",
            CategoryKey::Winter2005 => "2005-winter",
            CategoryKey::SundaySchedule => "sunday-schedule",
            CategoryKey::Upcoming => "upcoming",
        }
    }

    /// Upstream catalog query backing this category.
    pub const fn upstream_url(self) -> &'static str {
        match self {
            CategoryKey::WatchGuide => "https://api.jikan.moe/v4/seasons/2020/spring?sfw",
            CategoryKey::FanFavorites => "https://api.jikan.moe/v4/seasons/upcoming",
            CategoryKey::TopPicks => "https://api.jikan.moe/v4/seasons/2024/spring?sfw",
            CategoryKey::MostPopular => "https://api.jikan.moe/v4/top/anime?type=ona",
            CategoryKey::Winter2005 => "https://api.jikan.moe/v4/seasons/2005/winter?sfw",
            CategoryKey::SundaySchedule => "https://api.jikan.moe/v4/schedules/sunday?sfw",
            CategoryKey::Upcoming => "https://api.jikan.moe/v4/seasons/upcoming",
        }
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownCategory(s.to_string()))
    }
}
