use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::io;
use std::sync::Arc;

use leaves_calendar::{
    config::Config,
    docs::ApiDoc,
    remote::SheetClient,
    routes::{self, RateLimiters},
    store::LeaveStore,
};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Leaves calendar is running"
}

fn startup_error(e: anyhow::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{e:#}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env().map_err(startup_error)?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        addr = %config.server_addr,
        timezone = %config.business_timezone,
        "Server starting..."
    );

    let client = SheetClient::new(&config).map_err(startup_error)?;
    let store = Data::new(LeaveStore::new(Arc::new(client), config.cache_ttl));
    let limiters = RateLimiters::from_config(&config).map_err(startup_error)?;

    let server_addr = config.server_addr.clone();
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(config.clone())
            .service(index)
            // Configure auth + protected routes with rate limiting
            .configure(|cfg| routes::configure(cfg, &config, &limiters))
    })
    .bind(server_addr)?
    .run()
    .await
}
