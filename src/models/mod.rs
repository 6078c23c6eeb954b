// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetAllocation, CategoryFilter, ChecklistItem, GuestCountRange, Listing, ListingCategory,
    PriceBand, Priority, RejectReason, ScoreBreakdown, ScoredListing, ScoringWeights,
    WeddingProfile,
};
pub use requests::{
    EffectiveAllocationsRequest, GenerateChecklistRequest, RankListingsRequest,
    SuggestedAllocationsRequest,
};
pub use responses::{
    AllocationsResponse, ChecklistResponse, ErrorResponse, HealthResponse, RankListingsResponse,
};
