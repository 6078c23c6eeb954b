use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::geo::haversine_distance;
use crate::models::{
    CategoryFilter, Listing, PriceBand, RejectReason, ScoreBreakdown, ScoredListing,
    ScoringWeights, WeddingProfile,
};

/// Neutral distance sub-score when either side lacks coordinates.
// TODO: retune the 0.3 neutrals once real enquiry feedback is available.
const UNKNOWN_DISTANCE_NEUTRAL: f64 = 0.3;

/// Neutral tag sub-score when the query tag set is empty.
const EMPTY_TAG_QUERY_NEUTRAL: f64 = 0.3;

/// Neutral capacity sub-score for categories without capacity, or when the
/// caller supplies no guest estimate.
const NEUTRAL_CAPACITY: f64 = 0.7;

/// Capacity sub-score for listings that state no capacity range at all,
/// when unknown capacity is allowed.
const UNKNOWN_CAPACITY_SCORE: f64 = 0.5;

/// Flat penalty subtracted from the weighted sum when distance is unknown,
/// on top of the neutral distance sub-score.
const UNKNOWN_DISTANCE_PENALTY: f64 = 0.1;

/// A 1-2 tag query cannot reach a perfect tag score; the denominator never
/// drops below this.
const MIN_TAG_QUERY_SIZE: usize = 3;

/// Tuning knobs for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Search radius applied when the profile specifies none.
    pub default_radius_km: f64,
    /// Whether listings without any stated capacity score 0.5 instead of 0.
    pub allow_unknown_capacity: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 50.0,
            allow_unknown_capacity: true,
        }
    }
}

/// Price bands adjacent to each band: low<->mid and mid<->high, never low<->high.
fn adjacent_bands(band: PriceBand) -> &'static [PriceBand] {
    match band {
        PriceBand::Low => &[PriceBand::Mid],
        PriceBand::Mid => &[PriceBand::Low, PriceBand::High],
        PriceBand::High => &[PriceBand::Mid],
    }
}

/// Outcome of scoring a single listing
#[derive(Debug, Clone)]
pub enum ScoreOutcome {
    Matched(ScoredListing),
    Rejected(RejectReason),
}

impl ScoreOutcome {
    pub fn into_match(self) -> Option<ScoredListing> {
        match self {
            ScoreOutcome::Matched(scored) => Some(scored),
            ScoreOutcome::Rejected(_) => None,
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            ScoreOutcome::Matched(_) => None,
            ScoreOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Score a single listing against a wedding profile
///
/// Hard filters reject before any sub-score is computed: a category mismatch,
/// a hit on a caller-excluded tag, or a known distance beyond the search
/// radius. Everything else is scored as a weighted sum of five sub-scores
/// (distance, price, tags, capacity, priority boost) using the target
/// category's weight vector, or the listing's own when the filter is `any`.
#[allow(clippy::too_many_arguments)]
pub fn score_listing(
    profile: &WeddingProfile,
    listing: &Listing,
    target_category: CategoryFilter,
    required_tags: &[String],
    excluded_tags: &[String],
    user_price_bands: &[PriceBand],
    guest_estimate: Option<i32>,
    config: &MatchConfig,
) -> ScoreOutcome {
    if !target_category.accepts(listing.category) {
        return ScoreOutcome::Rejected(RejectReason::CategoryMismatch);
    }

    let listing_tags_lower: Vec<String> =
        listing.tags.iter().map(|t| t.to_lowercase()).collect();
    for excluded in excluded_tags {
        if listing_tags_lower.contains(&excluded.to_lowercase()) {
            return ScoreOutcome::Rejected(RejectReason::ExcludedTag);
        }
    }

    // Required tags stay soft via the tag overlap score so discovery keeps
    // partial matches.

    let radius_km = profile.radius_km.unwrap_or(config.default_radius_km);

    let mut distance_km = None;
    if let (Some((plat, plng)), Some((llat, llng))) =
        (profile.coordinates(), listing.coordinates())
    {
        let d = haversine_distance(plat, plng, llat, llng);
        if d > radius_km {
            return ScoreOutcome::Rejected(RejectReason::OutsideRadius);
        }
        distance_km = Some(d);
    }

    let weights = ScoringWeights::for_category(target_category.weight_category(listing.category));

    let distance_s = match distance_km {
        Some(d) => distance_score(d, radius_km),
        None => UNKNOWN_DISTANCE_NEUTRAL,
    };
    let price_s = price_fit_score(user_price_bands, listing.price_band);

    let mut query_tags = profile.theme_tags.clone();
    query_tags.extend_from_slice(required_tags);
    let tag_s = tag_overlap_score(&query_tags, &listing.tags);

    let capacity_s = if listing.category.has_capacity() {
        capacity_score(guest_estimate, listing, config)
    } else {
        NEUTRAL_CAPACITY
    };

    let priority_s = if profile.has_priority(listing.category) {
        1.0
    } else {
        0.0
    };

    let mut raw = weights.distance * distance_s
        + weights.price * price_s
        + weights.tags * tag_s
        + weights.capacity * capacity_s
        + weights.priority * priority_s;

    if distance_km.is_none() {
        raw -= UNKNOWN_DISTANCE_PENALTY;
    }

    let score = (clamp01(raw) * 100.0).round() as u8;

    ScoreOutcome::Matched(ScoredListing {
        listing_id: listing.id.clone(),
        score,
        breakdown: ScoreBreakdown {
            distance: distance_s,
            price: price_s,
            tags: tag_s,
            capacity: capacity_s,
            priority: priority_s,
        },
        distance_km,
    })
}

#[inline]
fn clamp01(n: f64) -> f64 {
    n.clamp(0.0, 1.0)
}

/// Distance score (0-1): linear falloff, exactly 0 at the radius edge
#[inline]
fn distance_score(distance_km: f64, radius_km: f64) -> f64 {
    if radius_km <= 0.0 {
        return if distance_km <= 0.0 { 1.0 } else { 0.0 };
    }
    if distance_km > radius_km {
        return 0.0;
    }
    clamp01(1.0 - distance_km / radius_km)
}

/// Price score (0-1): exact band match, adjacent band, or nothing
#[inline]
fn price_fit_score(user_bands: &[PriceBand], listing_band: PriceBand) -> f64 {
    if user_bands.contains(&listing_band) {
        return 1.0;
    }
    for band in user_bands {
        if adjacent_bands(*band).contains(&listing_band) {
            return 0.6;
        }
    }
    0.0
}

/// Tag overlap score (0-1)
///
/// Case-insensitive, trimmed set intersection between the query tags and the
/// listing tags, over a denominator of at least `MIN_TAG_QUERY_SIZE`. An
/// empty query set scores the neutral 0.3.
fn tag_overlap_score(query_tags: &[String], listing_tags: &[String]) -> f64 {
    let query: HashSet<String> = normalize_tags(query_tags);
    if query.is_empty() {
        return EMPTY_TAG_QUERY_NEUTRAL;
    }
    let listing: HashSet<String> = normalize_tags(listing_tags);

    let overlap = query.intersection(&listing).count();
    let denom = query.len().max(MIN_TAG_QUERY_SIZE);
    clamp01(overlap as f64 / denom as f64)
}

fn normalize_tags(tags: &[String]) -> HashSet<String> {
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Capacity score (0-1)
///
/// No guest estimate (or a non-positive one) is unknown demand and scores the
/// neutral 0.7. A listing with no stated capacity scores 0.5 when unknown
/// capacity is allowed, else 0. Otherwise 1.0 inside the stated range and 0
/// strictly outside it, with a missing min or max treated as unbounded.
fn capacity_score(guest_estimate: Option<i32>, listing: &Listing, config: &MatchConfig) -> f64 {
    let guests = match guest_estimate {
        Some(g) if g > 0 => g as u32,
        _ => return NEUTRAL_CAPACITY,
    };

    if listing.capacity_min.is_none() && listing.capacity_max.is_none() {
        return if config.allow_unknown_capacity {
            UNKNOWN_CAPACITY_SCORE
        } else {
            0.0
        };
    }
    if listing.capacity_min.is_some_and(|min| guests < min) {
        return 0.0;
    }
    if listing.capacity_max.is_some_and(|max| guests > max) {
        return 0.0;
    }
    1.0
}
