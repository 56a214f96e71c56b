use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::Instrument;
use uuid::Uuid;
use crate::core::{extract_image, is_multipart, AnalyzeError, ValidationError};
use crate::models::{AnalyzeResponse, ProfileOverrides};
use crate::routes::AppState;
use crate::services::InferenceError;

/// Configure the analyze route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze", web::post().to(analyze));
}

/// Analyze an uploaded skin image
///
/// POST /analyze?tone={tone}&type={type}
///
/// Multipart body with a single file field `image`. The optional `tone` and
/// `type` parameters override the skin profile used for catalog fallback.
async fn analyze(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<HttpResponse, AnalyzeError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id);

    async {
        match run(&state, &req, payload).await {
            Ok(response) => {
                tracing::info!(
                    "Analyzed image: {} issues, {} recommendations",
                    response.issues.len(),
                    response.recommendations.len()
                );
                Ok(HttpResponse::Ok().json(response))
            }
            Err(e) => {
                log_failure(&e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn run(
    state: &AppState,
    req: &HttpRequest,
    payload: Multipart,
) -> Result<AnalyzeResponse, AnalyzeError> {
    // Misconfiguration is reported whether or not an image was sent
    state.analyzer.inference_client()?;

    let overrides = web::Query::<ProfileOverrides>::from_query(req.query_string())
        .map_err(|e| ValidationError::InvalidQuery(e.to_string()))?
        .into_inner();

    if !is_multipart(req) {
        return Err(ValidationError::MissingImage.into());
    }

    let image = extract_image(payload, state.max_upload_bytes).await?;
    tracing::debug!("Received image: {} bytes, {}", image.len(), image.mime_type);

    state.analyzer.analyze(image, &overrides).await
}

fn log_failure(err: &AnalyzeError) {
    match err {
        AnalyzeError::Validation(e) => {
            tracing::info!(kind = "validation", "Rejected upload: {}", e);
        }
        AnalyzeError::Configuration => {
            tracing::error!(kind = "configuration", "ML_SERVICE_URL is not defined");
        }
        AnalyzeError::Inference(InferenceError::Upstream { status, body }) => {
            tracing::error!(kind = "inference", upstream_status = *status, "Analyze error: {}", body);
        }
        AnalyzeError::Inference(e) => {
            tracing::error!(kind = "inference", "Analyze error: {}", e);
        }
    }
}
