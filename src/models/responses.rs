use serde::{Deserialize, Serialize};

use crate::models::domain::{BudgetAllocation, ChecklistItem, ScoredListing};

/// Response for the rank listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankListingsResponse {
    pub matches: Vec<ScoredListing>,
    pub total_candidates: usize,
}

/// Response for the checklist generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
    pub total: usize,
}

/// Response for both budget allocation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationsResponse {
    pub allocations: Vec<BudgetAllocation>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub catalog_listings: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
