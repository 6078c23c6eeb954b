use std::path::Path;

use thiserror::Error;

use crate::models::{CategoryFilter, Listing};

/// Errors that can occur while loading the vendor catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory vendor catalog
///
/// Candidate listings served to searches that do not supply their own.
/// Loaded once at startup from a JSON array of listings; persistence of the
/// catalog itself lives with the calling platform.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load the catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} catalog listings from {}",
            listings.len(),
            path.as_ref().display()
        );
        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Candidates matching a category filter, in catalog order
    pub fn candidates(&self, category: CategoryFilter) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|listing| category.accepts(listing.category))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingCategory, PriceBand};

    fn listing(id: &str, category: ListingCategory) -> Listing {
        Listing {
            id: id.to_string(),
            category,
            name: id.to_string(),
            location_name: String::new(),
            lat: None,
            lng: None,
            price_band: PriceBand::Mid,
            tags: vec![],
            capacity_min: None,
            capacity_max: None,
            contact_url: String::new(),
            description: None,
        }
    }

    #[test]
    fn test_candidates_filter_by_category() {
        let catalog = ListingCatalog::new(vec![
            listing("v1", ListingCategory::Venue),
            listing("f1", ListingCategory::Florist),
            listing("v2", ListingCategory::Venue),
        ]);

        let venues = catalog.candidates(CategoryFilter::Venue);
        assert_eq!(venues.len(), 2);
        assert!(venues.iter().all(|l| l.category == ListingCategory::Venue));

        let any = catalog.candidates(CategoryFilter::Any);
        assert_eq!(any.len(), 3);
    }

    #[test]
    fn test_parse_catalog_json() {
        let raw = r#"[
            {
                "id": "venue-001",
                "type": "venue",
                "name": "Riverside Manor",
                "location_name": "Paarl",
                "lat": -33.73,
                "lng": 18.96,
                "price_band": "mid",
                "tags": ["rustic", "winelands"],
                "capacity_min": 40,
                "capacity_max": 180,
                "contact_url": "https://example.com"
            }
        ]"#;
        let listings: Vec<Listing> = serde_json::from_str(raw).unwrap();
        let catalog = ListingCatalog::new(listings);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].category, ListingCategory::Venue);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ListingCatalog::load_from_file("no/such/file.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
