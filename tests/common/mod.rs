//! Helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use serde_json::json;

use movie_browser::domain::listing::ListingItem;
use movie_browser::domain::types::{CategoryKey, ItemId};
use movie_browser::repository::{CatalogError, CatalogReader, CatalogResult, JikanRepository};

pub fn listing_item(id: i64) -> ListingItem {
    ListingItem {
        id: ItemId::new(id).expect("valid item id"),
        title: format!("Anime {id}"),
        image: format!("https://cdn.example.com/{id}.jpg"),
        rating: Some(7.5),
        description: format!("Synopsis {id}"),
        trailer_url: String::new(),
    }
}

/// Catalog reader returning canned listings; unknown categories fail like an
/// upstream 503.
#[derive(Default)]
pub struct StubCatalog {
    listings: HashMap<CategoryKey, Vec<ListingItem>>,
}

impl StubCatalog {
    pub fn with(mut self, category: CategoryKey, items: Vec<ListingItem>) -> Self {
        self.listings.insert(category, items);
        self
    }
}

#[async_trait]
impl CatalogReader for StubCatalog {
    async fn list_category(&self, category: CategoryKey) -> CatalogResult<Vec<ListingItem>> {
        self.listings
            .get(&category)
            .cloned()
            .ok_or_else(|| CatalogError::UpstreamFetch("503 Service Unavailable".into()))
    }
}

/// Catalog reader that sends every category to `{base}/{category}` on a local
/// fake upstream instead of the public catalog.
pub struct LocalCatalog {
    pub repo: JikanRepository,
    pub base: String,
}

#[async_trait]
impl CatalogReader for LocalCatalog {
    async fn list_category(&self, category: CategoryKey) -> CatalogResult<Vec<ListingItem>> {
        self.repo
            .fetch_listing(&format!("{}/{}", self.base, category))
            .await
    }
}

async fn fake_upstream(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    let accepts_json = req
        .headers()
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "application/json");
    if !accepts_json {
        return HttpResponse::NotAcceptable().finish();
    }

    match path.as_str() {
        // Complete record.
        "top-picks" => HttpResponse::Ok().json(json!({
            "data": [{
                "mal_id": 1,
                "title": "X",
                "images": { "jpg": { "image_url": "u", "small_image_url": "s" } },
                "score": 8.2,
                "synopsis": "s",
                "trailer": { "url": "t" }
            }],
            "pagination": { "has_next_page": false }
        })),
        // Record without synopsis and trailer.
        "upcoming" => HttpResponse::Ok().json(json!({
            "data": [{
                "mal_id": 2,
                "title": "Y",
                "images": { "jpg": { "image_url": "v" } },
                "score": null
            }]
        })),
        "sunday-schedule" => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>maintenance</html>"),
        _ => HttpResponse::ServiceUnavailable().finish(),
    }
}

/// Start a fake catalog on an ephemeral port and return its base URL.
pub fn spawn_fake_upstream() -> String {
    let server = HttpServer::new(|| App::new().route("/{category}", web::get().to(fake_upstream)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake upstream");
    let addr: SocketAddr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// Start the movie proxy backed by `catalog` on an ephemeral port and return
/// its base URL.
pub fn spawn_proxy<R>(catalog: R) -> String
where
    R: CatalogReader + 'static,
{
    let data = movie_browser::routes::catalog_data(catalog);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(movie_browser::routes::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind proxy");
    let addr: SocketAddr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}
