use actix_web::{HttpResponse, Responder, get};

pub const LIVENESS_MESSAGE: &str = "Movie Browser Backend is running";

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}
