use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::error::ErrorResponse;
use crate::routes::CatalogData;
use crate::services::ServiceError;
use crate::services::movies::list_movies;

#[get("/{category}")]
pub async fn movies_by_category(category: web::Path<String>, repo: CatalogData) -> impl Responder {
    match list_movies(&category, repo.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err @ ServiceError::UnknownCategory(_)) => {
            log::warn!("Rejected request for {err}");
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        Err(ServiceError::Internal) => {
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
