use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::resolve_profile;
use crate::models::{ErrorResponse, ProfileOverrides, RecommendationsQuery, RecommendationsRequest, RecommendationsResponse};
use crate::routes::AppState;

/// Configure the recommendation routes (mounted under `/recommendations`)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("", web::get().to(lookup))
        .route("", web::post().to(lookup_body))
        .route("/{product_id}", web::get().to(get_product));
}

fn recommend(state: &AppState, issues: Vec<String>, overrides: ProfileOverrides) -> HttpResponse {
    let profile = resolve_profile(&overrides, None);
    let recommendations = state.catalog.recommend(&issues, &profile);

    tracing::debug!("Catalog lookup for {:?} ({:?}): {} results", issues, profile, recommendations.len());

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        profile,
    })
}

/// Catalog lookup by query string
///
/// GET /recommendations?issues=acne,redness&tone={tone}&type={type}
async fn lookup(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    let issues = query.issue_list();
    if issues.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("issues query parameter is required"));
    }

    let query = query.into_inner();
    let overrides = ProfileOverrides {
        tone: query.tone,
        skin_type: query.skin_type,
    };

    recommend(&state, issues, overrides)
}

/// Catalog lookup by JSON body
///
/// POST /recommendations
///
/// Request body:
/// ```json
/// {
///   "issues": ["acne"],
///   "skinTone": "string",
///   "skinType": "string"
/// }
/// ```
async fn lookup_body(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!("Validation failed: {}", errors)));
    }

    let req = req.into_inner();
    let overrides = ProfileOverrides {
        tone: req.skin_tone,
        skin_type: req.skin_type,
    };

    recommend(&state, req.issues, overrides)
}

/// GET /recommendations/{product_id}
async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match state.catalog.product(&path) {
        Some(product) => HttpResponse::Ok().json(product),
        None => HttpResponse::NotFound().json(ErrorResponse::new("Product not found")),
    }
}
