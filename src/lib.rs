use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::provider::CredentialSearcher;
use crate::provider::http::HttpSearchClient;
use crate::routes::api::api_search;
use crate::routes::main::{
    health, show_benefits, show_faq, show_features, show_horizons, show_index,
};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod provider;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let provider: Arc<dyn CredentialSearcher> =
        Arc::new(HttpSearchClient::new(&server_config.search_api_url));
    let provider = web::Data::from(provider);

    let assets_dir = server_config.assets_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", &assets_dir))
            .service(web::scope("/api").service(api_search))
            .service(show_index)
            .service(show_features)
            .service(show_benefits)
            .service(show_horizons)
            .service(show_faq)
            .service(health)
            .app_data(web::Data::new(tera.clone()))
            .app_data(provider.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
