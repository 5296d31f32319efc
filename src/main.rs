use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;

mod actions;
mod api;
mod config;
mod docs;
mod error;
mod model;
mod routes;
mod utils;

use actions::ActionRegistry;
use config::Config;
use utils::backend_client::BackendClient;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let backend = BackendClient::new(config.backend_url.clone());
    info!(
        server_addr = %config.server_addr,
        backend_url = %backend.base_url(),
        "Action server starting..."
    );

    let registry = Data::new(ActionRegistry::with_builtin_actions(backend));
    info!(actions = ?registry.names(), "Actions registered");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard matches the JS/CSS assets
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(registry.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)?
    .run()
    .await
}
