use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use skincare_relay::config::Settings;
use skincare_relay::core::Analyzer;
use skincare_relay::routes::{self, AppState};
use skincare_relay::services::{HttpInferenceClient, InferenceClient, RecommendationCatalog, StaticCatalog};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

/// CORS policy from the configured allow-list; `*` allows any origin
fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(3600)
}

fn other_error<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_logging();

    info!("Starting skincare relay...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        other_error(e)
    })?;

    info!("Configuration loaded successfully");

    let catalog = match &settings.catalog.path {
        Some(path) => StaticCatalog::from_path(path, settings.catalog.max_results),
        None => StaticCatalog::builtin(settings.catalog.max_results),
    }
    .map_err(|e| {
        error!("Failed to load recommendation catalog: {}", e);
        other_error(e)
    })?;

    info!("Recommendation catalog loaded ({} products)", catalog.len());

    let inference: Option<Arc<dyn InferenceClient>> = match settings.inference.endpoint() {
        Some(endpoint) => {
            let client = HttpInferenceClient::new(endpoint.to_string(), settings.inference.content_type)
                .map_err(|e| {
                    error!("Failed to create inference client: {}", e);
                    other_error(e)
                })?;
            info!("Inference service: {} (content type: {:?})", endpoint, settings.inference.content_type);
            let client: Arc<dyn InferenceClient> = Arc::new(client);
            Some(client)
        }
        None => {
            warn!("ML_SERVICE_URL is not defined; /analyze will report a configuration error");
            None
        }
    };

    let catalog: Arc<dyn RecommendationCatalog> = Arc::new(catalog);

    let app_state = AppState {
        analyzer: Analyzer::new(inference, catalog.clone()),
        catalog,
        max_upload_bytes: settings.upload.max_bytes,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let allowed_origins = settings.cors.allowed_origins.clone();

    info!("Allowed CORS origins: {:?}", allowed_origins);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(build_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    let server = server.bind((host.as_str(), port))?;

    info!("Backend running on port {}", port);
    if let Ok(public_url) = std::env::var("RENDER_EXTERNAL_URL") {
        info!("Public URL: {}", public_url);
    }

    server.run().await
}
