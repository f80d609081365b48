use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::errors::ApiError;
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, HealthResponse, RankMatchesRequest,
    RankMatchesResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_candidates: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(compatibility))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "user": { "id": "string", "role": "mentee", ... },
///   "target": { "id": "string", "role": "mentor", ... }
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    let CompatibilityRequest { user, target } = req.into_inner();

    let compatibility = state.matcher.score(user.as_ref(), target.as_ref());

    tracing::debug!(
        "Scored {:?} -> {:?}: {}",
        user.as_ref().map(|p| p.id.as_str()),
        target.as_ref().map(|p| p.id.as_str()),
        compatibility
    );

    HttpResponse::Ok().json(CompatibilityResponse { compatibility })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "currentUser": { "id": "string", "role": "mentee", ... },
///   "candidates": [{ "id": "string", "role": "mentor", ... }]
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rank request: {}", errors);
        return Err(errors.into());
    }

    let count = req.candidates.len();
    if count > state.max_candidates {
        tracing::warn!(
            "Rejecting rank request with {} candidates (limit {})",
            count,
            state.max_candidates
        );
        return Err(ApiError::TooManyCandidates {
            count,
            limit: state.max_candidates,
        });
    }

    let RankMatchesRequest { current_user, candidates } = req.into_inner();

    let result = state.matcher.rank(current_user.as_ref(), &candidates);

    tracing::info!(
        "Returning {} matches for user {} ({} eligible of {} candidates)",
        result.matches.len(),
        current_user.as_ref().map(|p| p.id.as_str()).unwrap_or("<none>"),
        result.eligible_candidates,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RankMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_candidates: result.eligible_candidates,
    }))
}
