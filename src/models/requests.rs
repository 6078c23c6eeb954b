use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    BudgetAllocation, CategoryFilter, ChecklistItem, Listing, PriceBand, WeddingProfile,
};

/// Request to rank vendor listings for a wedding profile
///
/// When `listings` is omitted, candidates come from the service's loaded
/// catalog; an explicit empty array means "no candidates" and returns no
/// matches. Omitted price bands fall back to bands derived from the
/// profile's budget; an omitted guest estimate falls back to the profile's
/// guest-count bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankListingsRequest {
    pub profile: WeddingProfile,
    #[serde(default)]
    pub listings: Option<Vec<Listing>>,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(rename = "requiredTags", default)]
    pub required_tags: Vec<String>,
    #[serde(rename = "excludedTags", default)]
    pub excluded_tags: Vec<String>,
    #[serde(rename = "priceBands", default)]
    pub price_bands: Vec<PriceBand>,
    #[serde(rename = "guestEstimate", default)]
    pub guest_estimate: Option<i32>,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    5
}

/// Request to generate (or regenerate) a checklist
///
/// `existingItems` carries the previously persisted checklist so completion
/// state survives regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateChecklistRequest {
    pub profile: WeddingProfile,
    #[serde(rename = "existingItems", default)]
    pub existing_items: Vec<ChecklistItem>,
}

/// Request for suggested budget allocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAllocationsRequest {
    pub profile: WeddingProfile,
}

/// Request to apply allocation overrides
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EffectiveAllocationsRequest {
    pub suggested: Vec<BudgetAllocation>,
    #[serde(default)]
    pub overrides: HashMap<String, f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "totalBudget")]
    pub total_budget: f64,
}
