use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware};
use dotenvy::dotenv;

use movie_browser::models::config::ServerConfig;
use movie_browser::repository::JikanRepository;
use movie_browser::routes::{self, catalog_data};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
        }
    };

    let repo = catalog_data(JikanRepository::default());

    log::info!(
        "Server running on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(repo.clone())
            .configure(routes::configure)
    })
    .bind(server_config.bind_address())?
    .run()
    .await
}
