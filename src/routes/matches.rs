use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Matcher, RankParams};
use crate::models::{ErrorResponse, HealthResponse, RankListingsRequest, RankListingsResponse};
use crate::services::ListingCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub catalog: Arc<ListingCatalog>,
    pub max_limit: usize,
}

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_listings));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_listings: state.catalog.len(),
    })
}

/// Rank listings endpoint
///
/// POST /api/v1/matches/rank
///
/// Scores the supplied candidates (or the loaded catalog when the request
/// carries none) against the wedding profile and returns the top matches
/// with per-factor score breakdowns.
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankListingsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_listings request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = (req.limit as usize).min(state.max_limit);

    // Fall back to budget-derived bands and the profile's guest-count bucket
    // when the caller states no preference.
    let price_bands = if req.price_bands.is_empty() {
        req.profile.derived_price_bands()
    } else {
        req.price_bands
    };
    let guest_estimate = req.guest_estimate.or_else(|| req.profile.guest_estimate());

    let listings = match req.listings {
        Some(listings) => listings,
        None => state.catalog.candidates(req.category),
    };

    tracing::info!(
        "Ranking {} candidates (category: {:?}, limit: {})",
        listings.len(),
        req.category,
        limit
    );

    let params = RankParams {
        category: req.category,
        required_tags: req.required_tags,
        excluded_tags: req.excluded_tags,
        price_bands,
        guest_estimate,
        limit: Some(limit),
    };

    let outcome = state.matcher.rank_listings(&req.profile, &listings, &params);

    tracing::debug!(
        "Returning {} matches from {} candidates",
        outcome.matches.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(RankListingsResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
    })
}
