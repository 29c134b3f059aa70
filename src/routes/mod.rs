use std::sync::Arc;

use actix_web::web;

use crate::repository::CatalogReader;

pub mod main;
pub mod movies;

/// Shared handle to the catalog reader used by the movie routes.
pub type CatalogData = web::Data<dyn CatalogReader>;

/// Wrap a concrete catalog reader for registration with `App::app_data`.
pub fn catalog_data<R>(repo: R) -> CatalogData
where
    R: CatalogReader + 'static,
{
    let repo: Arc<dyn CatalogReader> = Arc::new(repo);
    web::Data::from(repo)
}

/// Mount the liveness route and the `/api/movies` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(web::scope("/api/movies").service(movies::movies_by_category));
}
