use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vendor listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Venue,
    Caterer,
    Florist,
    Boutique,
    Accommodation,
}

impl ListingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Venue => "venue",
            ListingCategory::Caterer => "caterer",
            ListingCategory::Florist => "florist",
            ListingCategory::Boutique => "boutique",
            ListingCategory::Accommodation => "accommodation",
        }
    }

    /// Capacity only applies to listings that physically host guests.
    pub fn has_capacity(&self) -> bool {
        matches!(self, ListingCategory::Venue | ListingCategory::Accommodation)
    }
}

/// Category filter for a match search
///
/// `Any` scores each listing under its own category's weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    Any,
    Venue,
    Caterer,
    Florist,
    Boutique,
    Accommodation,
}

impl CategoryFilter {
    /// Whether a listing of the given category passes this filter.
    pub fn accepts(&self, category: ListingCategory) -> bool {
        match self.target() {
            None => true,
            Some(target) => target == category,
        }
    }

    /// The concrete category this filter targets, if any.
    pub fn target(&self) -> Option<ListingCategory> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::Venue => Some(ListingCategory::Venue),
            CategoryFilter::Caterer => Some(ListingCategory::Caterer),
            CategoryFilter::Florist => Some(ListingCategory::Florist),
            CategoryFilter::Boutique => Some(ListingCategory::Boutique),
            CategoryFilter::Accommodation => Some(ListingCategory::Accommodation),
        }
    }

    /// The category whose weight vector applies when scoring `listing_category`.
    pub fn weight_category(&self, listing_category: ListingCategory) -> ListingCategory {
        self.target().unwrap_or(listing_category)
    }
}

impl From<ListingCategory> for CategoryFilter {
    fn from(category: ListingCategory) -> Self {
        match category {
            ListingCategory::Venue => CategoryFilter::Venue,
            ListingCategory::Caterer => CategoryFilter::Caterer,
            ListingCategory::Florist => CategoryFilter::Florist,
            ListingCategory::Boutique => CategoryFilter::Boutique,
            ListingCategory::Accommodation => CategoryFilter::Accommodation,
        }
    }
}

/// Coarse three-tier pricing classification used instead of exact prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Low,
    Mid,
    High,
}

/// Guest-count bucket collected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestCountRange {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-150")]
    From100To150,
    #[serde(rename = "150+")]
    Over150,
}

impl GuestCountRange {
    /// Representative guest count for the bucket, used when the caller
    /// supplies no explicit estimate.
    pub fn guest_estimate(&self) -> i32 {
        match self {
            GuestCountRange::UpTo50 => 35,
            GuestCountRange::From50To100 => 75,
            GuestCountRange::From100To150 => 125,
            GuestCountRange::Over150 => 175,
        }
    }
}

/// One of the couple's top-3 stated planning priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Venue,
    Food,
    Photography,
    #[serde(rename = "Décor")]
    Decor,
    Accommodation,
    #[serde(rename = "Music/Party")]
    MusicParty,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Venue => "Venue",
            Priority::Food => "Food",
            Priority::Photography => "Photography",
            Priority::Decor => "Décor",
            Priority::Accommodation => "Accommodation",
            Priority::MusicParty => "Music/Party",
        }
    }

    /// Priority-boost match: the listing's category name (lower-cased) must
    /// appear verbatim in the priority list (lower-cased).
    pub fn matches_category(&self, category: ListingCategory) -> bool {
        self.as_str().eq_ignore_ascii_case(category.as_str())
    }
}

/// The couple's stated preferences, snapshotted by onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingProfile {
    #[serde(rename = "weddingDate", default)]
    pub wedding_date: Option<NaiveDate>,
    #[serde(rename = "guestCountRange", default)]
    pub guest_count_range: Option<GuestCountRange>,
    #[serde(rename = "totalBudget", default)]
    pub total_budget: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "locationLat", default)]
    pub location_lat: Option<f64>,
    #[serde(rename = "locationLng", default)]
    pub location_lng: Option<f64>,
    #[serde(rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(rename = "themePrimary", default)]
    pub theme_primary: String,
    #[serde(rename = "themeSecondary", default)]
    pub theme_secondary: Option<String>,
    #[serde(rename = "themeTags", default)]
    pub theme_tags: Vec<String>,
    #[serde(rename = "themeColors", default)]
    pub theme_colors: Vec<String>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

impl WeddingProfile {
    /// Search-center coordinates, when the couple picked a location.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn has_priority(&self, category: ListingCategory) -> bool {
        self.priorities.iter().any(|p| p.matches_category(category))
    }

    /// Accepted price bands inferred from the total budget, for callers that
    /// state no explicit band preference. Falls back to all three bands.
    pub fn derived_price_bands(&self) -> Vec<PriceBand> {
        match self.total_budget {
            Some(budget) if budget > 0.0 => {
                if budget < 50_000.0 {
                    vec![PriceBand::Low]
                } else if budget < 150_000.0 {
                    vec![PriceBand::Low, PriceBand::Mid]
                } else if budget < 300_000.0 {
                    vec![PriceBand::Mid, PriceBand::High]
                } else {
                    vec![PriceBand::High]
                }
            }
            _ => vec![PriceBand::Low, PriceBand::Mid, PriceBand::High],
        }
    }

    /// Guest estimate derived from the guest-count bucket.
    pub fn guest_estimate(&self) -> Option<i32> {
        self.guest_count_range.map(|r| r.guest_estimate())
    }
}

/// A vendor/venue candidate, read-only input to scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(rename = "type")]
    pub category: ListingCategory,
    pub name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub price_band: PriceBand,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub capacity_min: Option<u32>,
    #[serde(default)]
    pub capacity_max: Option<u32>,
    #[serde(default)]
    pub contact_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Listing {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Sub-score weights for one listing category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub price: f64,
    pub capacity: f64,
    pub tags: f64,
    pub priority: f64,
}

impl ScoringWeights {
    /// Fixed per-category weight table. Weights sum to 1.0 per category.
    pub const fn for_category(category: ListingCategory) -> Self {
        match category {
            ListingCategory::Venue => Self {
                distance: 0.30,
                price: 0.25,
                capacity: 0.25,
                tags: 0.15,
                priority: 0.05,
            },
            ListingCategory::Caterer => Self {
                distance: 0.25,
                price: 0.30,
                capacity: 0.00,
                tags: 0.35,
                priority: 0.10,
            },
            ListingCategory::Florist => Self {
                distance: 0.25,
                price: 0.30,
                capacity: 0.00,
                tags: 0.35,
                priority: 0.10,
            },
            ListingCategory::Boutique => Self {
                distance: 0.25,
                price: 0.30,
                capacity: 0.00,
                tags: 0.35,
                priority: 0.10,
            },
            ListingCategory::Accommodation => Self {
                distance: 0.35,
                price: 0.25,
                capacity: 0.20,
                tags: 0.10,
                priority: 0.10,
            },
        }
    }
}

/// Raw sub-scores, unclamped and pre-weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub price: f64,
    pub tags: f64,
    pub capacity: f64,
    pub priority: f64,
}

/// Scored match result for a single listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing_id: String,
    /// Composite score, 0-100.
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    /// Distance in km; `None` when either side lacks coordinates.
    pub distance_km: Option<f64>,
}

/// Why a listing was excluded before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    CategoryMismatch,
    ExcludedTag,
    OutsideRadius,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::CategoryMismatch => "category_mismatch",
            RejectReason::ExcludedTag => "excluded_tag",
            RejectReason::OutsideRadius => "outside_radius",
        }
    }
}

/// Generated, per-plan instance of a checklist template entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub task_key: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub priority_score: i32,
    #[serde(default)]
    pub notes: String,
    pub reminder_enabled: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub is_optional: bool,
}

/// Suggested spend for one budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: String,
    #[serde(rename = "suggestedPercent")]
    pub suggested_percent: f64,
    #[serde(rename = "suggestedAmount")]
    pub suggested_amount: f64,
}
