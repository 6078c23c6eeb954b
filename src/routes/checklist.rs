use actix_web::{web, HttpResponse, Responder};

use crate::core::{generate_checklist, merge_checklist};
use crate::models::{ChecklistResponse, GenerateChecklistRequest};

/// Configure checklist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/checklist/generate", web::post().to(generate));
}

/// Checklist generation endpoint
///
/// POST /api/v1/checklist/generate
///
/// Generates the full task list for the profile. When the request carries
/// previously persisted items, their identifiers, completion flags, and
/// reminder flags are preserved by task key.
async fn generate(req: web::Json<GenerateChecklistRequest>) -> impl Responder {
    let req = req.into_inner();

    let items = generate_checklist(&req.profile);
    let items = if req.existing_items.is_empty() {
        items
    } else {
        merge_checklist(items, &req.existing_items)
    };

    tracing::info!(
        "Generated {} checklist items (wedding date: {:?})",
        items.len(),
        req.profile.wedding_date
    );

    HttpResponse::Ok().json(ChecklistResponse {
        total: items.len(),
        items,
    })
}
