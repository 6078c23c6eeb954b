use std::collections::HashMap;

use crate::models::{BudgetAllocation, ListingCategory, Priority, WeddingProfile};

/// Budget categories in suggestion order
pub const BUDGET_CATEGORIES: &[&str] = &[
    "Venue",
    "Food & Beverage",
    "Photography",
    "D\u{e9}cor & Flowers",
    "Attire",
    "Music/Entertainment",
    "Accommodation",
    "Other",
];

/// Base percentage per category; sums to 100
const BASE_PERCENTAGES: &[(&str, f64)] = &[
    ("Venue", 35.0),
    ("Food & Beverage", 30.0),
    ("Photography", 10.0),
    ("D\u{e9}cor & Flowers", 10.0),
    ("Attire", 5.0),
    ("Music/Entertainment", 5.0),
    ("Accommodation", 3.0),
    ("Other", 2.0),
];

/// Additive percentage boost per chosen priority
fn priority_boost(priority: Priority) -> (&'static str, f64) {
    match priority {
        Priority::Venue => ("Venue", 5.0),
        Priority::Food => ("Food & Beverage", 5.0),
        Priority::Photography => ("Photography", 3.0),
        Priority::Decor => ("D\u{e9}cor & Flowers", 3.0),
        Priority::Accommodation => ("Accommodation", 2.0),
        Priority::MusicParty => ("Music/Entertainment", 3.0),
    }
}

/// Suggested percentage-of-budget breakdown for a wedding profile
///
/// Starts from the fixed base table, applies the priority boosts, then
/// renormalizes so the percentages sum to 100 again. Amounts use the
/// profile's total budget (0 when unset).
pub fn suggested_allocations(profile: &WeddingProfile) -> Vec<BudgetAllocation> {
    let total_budget = profile.total_budget.unwrap_or(0.0);

    // Duplicate priorities only boost once.
    let mut boosts: HashMap<&str, f64> = HashMap::new();
    for priority in &profile.priorities {
        let (category, boost) = priority_boost(*priority);
        boosts.insert(category, boost);
    }

    let mut total_percent = 100.0;
    let mut allocations: Vec<BudgetAllocation> = BASE_PERCENTAGES
        .iter()
        .map(|(category, base)| {
            let boost = boosts.get(category).copied().unwrap_or(0.0);
            total_percent += boost;
            BudgetAllocation {
                category: category.to_string(),
                suggested_percent: base + boost,
                suggested_amount: 0.0,
            }
        })
        .collect();

    for allocation in &mut allocations {
        allocation.suggested_percent = allocation.suggested_percent / total_percent * 100.0;
        allocation.suggested_amount = total_budget * allocation.suggested_percent / 100.0;
    }

    allocations
}

/// Merge suggested allocations with user overrides and renormalize to 100%
///
/// Per category, a caller-supplied override percent takes precedence over the
/// suggestion. An override set summing to zero or less returns the
/// suggestions unchanged.
pub fn effective_allocations(
    suggested: &[BudgetAllocation],
    overrides: &HashMap<String, f64>,
    total_budget: f64,
) -> Vec<BudgetAllocation> {
    let base: Vec<(String, f64)> = suggested
        .iter()
        .map(|allocation| {
            let percent = overrides
                .get(&allocation.category)
                .copied()
                .unwrap_or(allocation.suggested_percent);
            (allocation.category.clone(), percent)
        })
        .collect();

    let total: f64 = base.iter().map(|(_, percent)| percent).sum();
    if total <= 0.0 {
        return suggested.to_vec();
    }

    base.into_iter()
        .map(|(category, percent)| {
            let normalized = percent / total * 100.0;
            BudgetAllocation {
                category,
                suggested_percent: normalized,
                suggested_amount: total_budget * normalized / 100.0,
            }
        })
        .collect()
}

/// Budget category a listing's spend lands in
pub fn listing_category_to_budget_category(category: ListingCategory) -> &'static str {
    match category {
        ListingCategory::Venue => "Venue",
        ListingCategory::Caterer => "Food & Beverage",
        ListingCategory::Florist => "D\u{e9}cor & Flowers",
        ListingCategory::Boutique => "Attire",
        ListingCategory::Accommodation => "Accommodation",
    }
}
