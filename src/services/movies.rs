use crate::domain::listing::ListingItem;
use crate::domain::types::CategoryKey;
use crate::repository::CatalogReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the `/api/movies/{category}` endpoint.
///
/// The raw path segment is validated against the configured categories before
/// anything is sent upstream. Catalog failures of any kind are logged with the
/// category key and collapsed into [`ServiceError::Internal`] so that the HTTP
/// route can remain a thin wrapper.
pub async fn list_movies<R>(category: &str, repo: &R) -> ServiceResult<Vec<ListingItem>>
where
    R: CatalogReader + ?Sized,
{
    let category: CategoryKey = category
        .parse()
        .map_err(|_| ServiceError::UnknownCategory(category.to_string()))?;

    match repo.list_category(category).await {
        Ok(items) => Ok(items),
        Err(e) => {
            log::error!("Error fetching anime for {category}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ItemId;
    use crate::repository::test::TestRepository;

    fn sample_item(id: i64) -> ListingItem {
        ListingItem {
            id: ItemId::new(id).unwrap(),
            title: format!("Anime {id}"),
            image: format!("https://cdn.example.com/{id}.jpg"),
            rating: Some(7.5),
            description: String::new(),
            trailer_url: String::new(),
        }
    }

    #[tokio::test]
    async fn returns_listing_for_every_configured_category() {
        let repo = TestRepository::new(
            CategoryKey::ALL
                .into_iter()
                .map(|key| (key, vec![sample_item(1), sample_item(2)]))
                .collect(),
        );

        for key in CategoryKey::ALL {
            let result = list_movies(key.as_str(), &repo).await.unwrap();
            assert_eq!(result, vec![sample_item(1), sample_item(2)]);
        }
        assert_eq!(repo.calls(), CategoryKey::ALL.to_vec());
    }

    #[tokio::test]
    async fn unknown_category_never_reaches_upstream() {
        let repo = TestRepository::default();

        let result = list_movies("from-your-watchlist", &repo).await;

        assert_eq!(
            result,
            Err(ServiceError::UnknownCategory("from-your-watchlist".into()))
        );
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_internal() {
        let repo = TestRepository::default();

        let result = list_movies("top-picks", &repo).await;

        assert_eq!(result, Err(ServiceError::Internal));
    }

    #[tokio::test]
    async fn malformed_upstream_is_internal() {
        let repo = TestRepository::new(vec![(CategoryKey::Upcoming, vec![sample_item(3)])])
            .with_malformed(CategoryKey::Upcoming);

        let result = list_movies("upcoming", &repo).await;

        assert_eq!(result, Err(ServiceError::Internal));
    }

    #[tokio::test]
    async fn empty_upstream_listing_is_not_an_error() {
        let repo = TestRepository::new(vec![(CategoryKey::SundaySchedule, vec![])]);

        let result = list_movies("sunday-schedule", &repo).await.unwrap();

        assert!(result.is_empty());
    }
}
