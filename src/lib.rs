//! Vowable Algo - Vendor matching and planning engine for the Vowable wedding planner
//!
//! This library provides the core algorithms behind the Vowable wedding
//! planner: multi-factor vendor scoring and ranking, dependency-aware
//! checklist generation, and budget allocation suggestions. The core is
//! pure and synchronous; the binary wraps it in a small HTTP service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    effective_allocations, filter_by_radius, generate_checklist, haversine_distance,
    merge_checklist, score_listing, suggested_allocations, MatchConfig, Matcher, RankParams,
    ScoreOutcome,
};
pub use crate::models::{
    BudgetAllocation, CategoryFilter, ChecklistItem, Listing, ListingCategory, PriceBand,
    Priority, RejectReason, ScoredListing, WeddingProfile,
};
