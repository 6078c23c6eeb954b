use crate::models::Listing;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lng1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lng2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A listing paired with its distance from the search center
#[derive(Debug, Clone)]
pub struct RadiusMatch<'a> {
    pub listing: &'a Listing,
    pub distance_km: f64,
}

/// Filter listings to those within `radius_km` of a center point
///
/// Listings without coordinates are skipped. The result is sorted ascending
/// by distance; callers rely on closest-first ordering.
pub fn filter_by_radius<'a>(
    listings: &'a [Listing],
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
) -> Vec<RadiusMatch<'a>> {
    let mut within: Vec<RadiusMatch<'a>> = listings
        .iter()
        .filter_map(|listing| {
            let (lat, lng) = listing.coordinates()?;
            let distance_km = haversine_distance(center_lat, center_lng, lat, lng);
            (distance_km <= radius_km).then_some(RadiusMatch {
                listing,
                distance_km,
            })
        })
        .collect();

    within.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    within
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingCategory, PriceBand};

    fn listing_at(id: &str, lat: f64, lng: f64) -> Listing {
        Listing {
            id: id.to_string(),
            category: ListingCategory::Venue,
            name: format!("Venue {}", id),
            location_name: "Cape Town".to_string(),
            lat: Some(lat),
            lng: Some(lng),
            price_band: PriceBand::Mid,
            tags: vec![],
            capacity_min: None,
            capacity_max: None,
            contact_url: String::new(),
            description: None,
        }
    }

    #[test]
    fn test_haversine_distance_zero_for_identical_points() {
        let distance = haversine_distance(-33.9249, 18.4241, -33.9249, 18.4241);
        assert!(distance < 0.01);
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        // Cape Town to Stellenbosch, both directions
        let forward = haversine_distance(-33.9249, 18.4241, -33.9321, 18.8602);
        let backward = haversine_distance(-33.9321, 18.8602, -33.9249, 18.4241);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_distance_cape_town_to_stellenbosch() {
        // Approximately 40 km apart
        let distance = haversine_distance(-33.9249, 18.4241, -33.9321, 18.8602);
        assert!(
            distance > 30.0 && distance < 50.0,
            "Distance should be ~40km, got {}",
            distance
        );
    }

    #[test]
    fn test_filter_by_radius_excludes_far_points() {
        let listings = vec![
            listing_at("near", -33.93, 18.43),
            listing_at("far", -34.4, 20.0), // Overberg, well outside 50km
        ];

        let within = filter_by_radius(&listings, -33.9249, 18.4241, 50.0);

        assert_eq!(within.len(), 1);
        assert_eq!(within[0].listing.id, "near");
        assert!(within[0].distance_km <= 50.0);
    }

    #[test]
    fn test_filter_by_radius_sorted_ascending() {
        let listings = vec![
            listing_at("c", -33.93, 18.86),
            listing_at("a", -33.9249, 18.4241),
            listing_at("b", -33.93, 18.6),
        ];

        let within = filter_by_radius(&listings, -33.9249, 18.4241, 100.0);

        assert_eq!(within.len(), 3);
        for pair in within.windows(2) {
            assert!(
                pair[0].distance_km <= pair[1].distance_km,
                "results not sorted ascending by distance"
            );
        }
        assert_eq!(within[0].listing.id, "a");
    }

    #[test]
    fn test_filter_by_radius_skips_missing_coordinates() {
        let mut no_coords = listing_at("x", 0.0, 0.0);
        no_coords.lat = None;
        no_coords.lng = None;
        let listings = vec![no_coords, listing_at("y", -33.93, 18.43)];

        let within = filter_by_radius(&listings, -33.9249, 18.4241, 50.0);

        assert_eq!(within.len(), 1);
        assert_eq!(within[0].listing.id, "y");
    }
}
