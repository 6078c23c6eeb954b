// Unit tests for Vowable Algo

use vowable_algo::core::{
    budget::{effective_allocations, suggested_allocations},
    checklist::generate_checklist,
    geo::{filter_by_radius, haversine_distance},
    scoring::{score_listing, MatchConfig},
};
use vowable_algo::models::{
    CategoryFilter, Listing, ListingCategory, PriceBand, Priority, RejectReason, WeddingProfile,
};

use std::collections::HashMap;

fn create_profile() -> WeddingProfile {
    WeddingProfile {
        wedding_date: None,
        guest_count_range: None,
        total_budget: Some(200_000.0),
        location: "Stellenbosch".to_string(),
        location_lat: Some(-33.9321),
        location_lng: Some(18.8602),
        radius_km: Some(50.0),
        theme_primary: "rustic".to_string(),
        theme_secondary: None,
        theme_tags: vec!["rustic".to_string(), "garden".to_string(), "winelands".to_string()],
        theme_colors: vec!["olive".to_string(), "cream".to_string()],
        priorities: vec![Priority::Venue, Priority::Food],
    }
}

fn create_listing(id: &str, category: ListingCategory, lat: f64, lng: f64) -> Listing {
    Listing {
        id: id.to_string(),
        category,
        name: format!("Listing {}", id),
        location_name: "Stellenbosch".to_string(),
        lat: Some(lat),
        lng: Some(lng),
        price_band: PriceBand::Mid,
        tags: vec!["rustic".to_string(), "garden".to_string()],
        capacity_min: Some(50),
        capacity_max: Some(150),
        contact_url: String::new(),
        description: None,
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(-33.9249, 18.4241, -33.9249, 18.4241);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_distance_symmetric() {
    let forward = haversine_distance(-33.9249, 18.4241, -34.4187, 19.2345);
    let backward = haversine_distance(-34.4187, 19.2345, -33.9249, 18.4241);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_haversine_distance_cape_town_to_hermanus() {
    // Cape Town to Hermanus is approximately 95km as the crow flies
    let distance = haversine_distance(-33.9249, 18.4241, -34.4187, 19.2345);
    assert!(
        distance > 80.0 && distance < 110.0,
        "Distance should be ~95km, got {}",
        distance
    );
}

#[test]
fn test_filter_by_radius_never_exceeds_radius() {
    let listings = vec![
        create_listing("1", ListingCategory::Venue, -33.93, 18.87),
        create_listing("2", ListingCategory::Venue, -33.09, 18.03),
        create_listing("3", ListingCategory::Venue, -34.42, 19.23),
    ];

    let within = filter_by_radius(&listings, -33.9321, 18.8602, 30.0);

    for item in &within {
        assert!(item.distance_km <= 30.0);
    }
}

#[test]
fn test_filter_by_radius_sorted_closest_first() {
    let listings = vec![
        create_listing("far", ListingCategory::Venue, -33.73, 18.96),
        create_listing("near", ListingCategory::Venue, -33.9321, 18.8602),
        create_listing("mid", ListingCategory::Venue, -33.91, 19.12),
    ];

    let within = filter_by_radius(&listings, -33.9321, 18.8602, 100.0);

    assert_eq!(within.len(), 3);
    assert_eq!(within[0].listing.id, "near");
    for pair in within.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
}

#[test]
fn test_excluded_tag_always_rejects() {
    let profile = create_profile();
    let listing = create_listing("1", ListingCategory::Venue, -33.9321, 18.8602);

    // Even a perfect candidate is rejected on an excluded tag.
    let outcome = score_listing(
        &profile,
        &listing,
        CategoryFilter::Venue,
        &[],
        &["rustic".to_string()],
        &[PriceBand::Mid],
        Some(100),
        &MatchConfig::default(),
    );

    assert_eq!(outcome.reject_reason(), Some(RejectReason::ExcludedTag));
}

#[test]
fn test_category_mismatch_always_rejects() {
    let profile = create_profile();
    let listing = create_listing("1", ListingCategory::Venue, -33.9321, 18.8602);

    let outcome = score_listing(
        &profile,
        &listing,
        CategoryFilter::Caterer,
        &[],
        &[],
        &[PriceBand::Mid],
        None,
        &MatchConfig::default(),
    );

    assert_eq!(outcome.reject_reason(), Some(RejectReason::CategoryMismatch));
}

#[test]
fn test_any_category_uses_listing_weights() {
    let profile = create_profile();

    for category in [
        ListingCategory::Venue,
        ListingCategory::Caterer,
        ListingCategory::Florist,
        ListingCategory::Boutique,
        ListingCategory::Accommodation,
    ] {
        let listing = create_listing("1", category, -33.9321, 18.8602);

        let via_any = score_listing(
            &profile,
            &listing,
            CategoryFilter::Any,
            &[],
            &[],
            &[PriceBand::Mid],
            Some(100),
            &MatchConfig::default(),
        )
        .into_match()
        .unwrap();

        let via_own = score_listing(
            &profile,
            &listing,
            CategoryFilter::from(category),
            &[],
            &[],
            &[PriceBand::Mid],
            Some(100),
            &MatchConfig::default(),
        )
        .into_match()
        .unwrap();

        assert_eq!(
            via_any.score, via_own.score,
            "scores differ for {:?}",
            category
        );
    }
}

#[test]
fn test_checklist_with_date_is_sorted_by_due_date() {
    let mut profile = create_profile();
    profile.wedding_date = chrono::NaiveDate::from_ymd_opt(2026, 10, 3);

    let items = generate_checklist(&profile);

    assert!(items.iter().all(|i| i.due_date.is_some()));
    for pair in items.windows(2) {
        let (da, db) = (pair[0].due_date.unwrap(), pair[1].due_date.unwrap());
        assert!(da <= db);
        if da == db {
            assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }
}

#[test]
fn test_checklist_without_date_falls_back_to_priority_order() {
    let mut profile = create_profile();
    profile.wedding_date = None;

    let items = generate_checklist(&profile);

    assert!(items.iter().all(|i| i.due_date.is_none()));
    for pair in items.windows(2) {
        assert!(pair[0].priority_score >= pair[1].priority_score);
    }
}

#[test]
fn test_suggested_allocations_sum_to_100() {
    let mut profile = create_profile();

    let combos: Vec<Vec<Priority>> = vec![
        vec![],
        vec![Priority::Venue],
        vec![Priority::Food, Priority::Photography],
        vec![Priority::Decor, Priority::Accommodation, Priority::MusicParty],
    ];

    for priorities in combos {
        profile.priorities = priorities;
        let allocations = suggested_allocations(&profile);
        let sum: f64 = allocations.iter().map(|a| a.suggested_percent).sum();
        assert!(
            (sum - 100.0).abs() < 1e-9,
            "percentages sum to {}, expected 100",
            sum
        );
    }
}

#[test]
fn test_effective_allocations_zero_sum_overrides() {
    let profile = create_profile();
    let suggested = suggested_allocations(&profile);

    let mut overrides = HashMap::new();
    for allocation in &suggested {
        overrides.insert(allocation.category.clone(), 0.0);
    }

    let effective = effective_allocations(&suggested, &overrides, 200_000.0);

    // Content equality with the original suggestions.
    assert_eq!(effective, suggested);
}
