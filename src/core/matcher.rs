use crate::core::scoring::{score_listing, MatchConfig};
use crate::models::{CategoryFilter, Listing, PriceBand, ScoredListing, WeddingProfile};

/// Default number of matches returned per search
pub const DEFAULT_LIMIT: usize = 5;

/// Search parameters for one ranking run
#[derive(Debug, Clone, Default)]
pub struct RankParams {
    pub category: CategoryFilter,
    pub required_tags: Vec<String>,
    pub excluded_tags: Vec<String>,
    pub price_bands: Vec<PriceBand>,
    pub guest_estimate: Option<i32>,
    pub limit: Option<usize>,
}

/// Result of a ranking run
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<ScoredListing>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// Scores every candidate, drops hard-rejected ones, sorts descending by
/// composite score, and returns the top `limit` results. The only entry
/// point expected per user-facing search.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank candidate listings for a wedding profile
    pub fn rank_listings(
        &self,
        profile: &WeddingProfile,
        listings: &[Listing],
        params: &RankParams,
    ) -> RankOutcome {
        let total_candidates = listings.len();
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

        let mut matches: Vec<ScoredListing> = listings
            .iter()
            .filter_map(|listing| {
                score_listing(
                    profile,
                    listing,
                    params.category,
                    &params.required_tags,
                    &params.excluded_tags,
                    &params.price_bands,
                    params.guest_estimate,
                    &self.config,
                )
                .into_match()
            })
            .collect();

        // Sort by score (descending), then by distance (ascending, unknown
        // distances last).
        matches.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                match (a.distance_km, b.distance_km) {
                    (Some(da), Some(db)) => {
                        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                    }
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            })
        });

        matches.truncate(limit);

        RankOutcome {
            matches,
            total_candidates,
        }
    }
}
