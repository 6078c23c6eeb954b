// Core algorithm exports
pub mod budget;
pub mod checklist;
pub mod dates;
pub mod geo;
pub mod matcher;
pub mod scoring;

pub use budget::{effective_allocations, listing_category_to_budget_category, suggested_allocations, BUDGET_CATEGORIES};
pub use checklist::{generate_checklist, merge_checklist, ChecklistTemplate, CHECKLIST_TEMPLATES};
pub use geo::{filter_by_radius, haversine_distance, RadiusMatch};
pub use matcher::{Matcher, RankOutcome, RankParams, DEFAULT_LIMIT};
pub use scoring::{score_listing, MatchConfig, ScoreOutcome};
