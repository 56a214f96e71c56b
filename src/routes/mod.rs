// Route exports
pub mod analyze;
pub mod recommendations;

use crate::core::Analyzer;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::RecommendationCatalog;
use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder, ResponseError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub catalog: Arc<dyn RecommendationCatalog>,
    pub max_upload_bytes: usize,
}

/// JSON error body for extractor failures
#[derive(Debug)]
pub struct JsonError {
    pub message: String,
    pub status_code: StatusCode,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for JsonError {}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code).json(ErrorResponse::new(self.message.clone()))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        message: format!("Invalid JSON: {}", err),
        status_code: StatusCode::BAD_REQUEST,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        message: format!("Invalid query: {}", err),
        status_code: StatusCode::BAD_REQUEST,
    }
    .into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .configure(analyze::configure)
        .service(web::scope("/recommendations").configure(recommendations::configure));
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend is running! Use /analyze endpoint for predictions.")
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
