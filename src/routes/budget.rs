use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{effective_allocations, suggested_allocations};
use crate::models::{
    AllocationsResponse, EffectiveAllocationsRequest, ErrorResponse, SuggestedAllocationsRequest,
};

/// Configure budget routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/budget/suggested", web::post().to(suggested))
        .route("/budget/effective", web::post().to(effective));
}

/// Suggested allocations endpoint
///
/// POST /api/v1/budget/suggested
async fn suggested(req: web::Json<SuggestedAllocationsRequest>) -> impl Responder {
    let allocations = suggested_allocations(&req.profile);

    tracing::debug!(
        "Suggested {} allocations (budget: {:?}, priorities: {:?})",
        allocations.len(),
        req.profile.total_budget,
        req.profile.priorities
    );

    HttpResponse::Ok().json(AllocationsResponse { allocations })
}

/// Effective allocations endpoint
///
/// POST /api/v1/budget/effective
///
/// Applies per-category overrides to the suggested allocations and
/// renormalizes to 100%.
async fn effective(req: web::Json<EffectiveAllocationsRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let allocations = effective_allocations(&req.suggested, &req.overrides, req.total_budget);

    HttpResponse::Ok().json(AllocationsResponse { allocations })
}
