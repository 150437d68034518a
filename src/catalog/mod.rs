pub mod filter;
pub mod mock;

pub use filter::{GenderFilter, ListingFilter, RentTypeFilter, DEFAULT_MAX_ANNUAL_PRICE};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::Hostel;

/// In-memory listings, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Hostel>,
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the mock listings
    pub fn seeded() -> Self {
        Self {
            listings: mock::seed(),
        }
    }

    pub fn insert(&mut self, hostel: Hostel) -> Result<(), CatalogError> {
        if self.get(&hostel.id).is_some() {
            return Err(CatalogError::DuplicateId(hostel.id));
        }
        if let Err(source) = hostel.check_invariants() {
            return Err(CatalogError::InvalidListing {
                id: hostel.id,
                source,
            });
        }
        info!(id = %hostel.id, name = %hostel.name, "listing added");
        self.listings.push(hostel);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Hostel> {
        self.listings.iter().find(|h| h.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hostel> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listings matching `filter`, in catalog order.
    pub fn filter(&self, filter: &ListingFilter) -> Vec<&Hostel> {
        let found = filter.apply(&self.listings);
        debug!(?filter, matched = found.len(), total = self.len(), "filtered catalog");
        found
    }

    pub fn owned_by<'a>(&'a self, owner_id: &'a str) -> impl Iterator<Item = &'a Hostel> + 'a {
        self.listings.iter().filter(move |h| h.owner_id == owner_id)
    }

    pub fn portfolio(&self, owner_id: &str) -> PortfolioSummary {
        PortfolioSummary::from_listings(self.owned_by(owner_id))
    }
}

/// Listings a student has saved from the browse view
#[derive(Debug, Clone, Default)]
pub struct Shortlist {
    ids: Vec<String>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save or unsave a listing. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Saved listings still present in `catalog`, in catalog order.
    pub fn listings<'a>(&self, catalog: &'a ListingCatalog) -> Vec<&'a Hostel> {
        catalog.iter().filter(|h| self.contains(&h.id)).collect()
    }
}

/// Headline numbers for an owner's dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub listings: usize,
    pub verified: usize,
    pub available_rooms: u64,
    /// Mean rating over listings that have reviews
    pub average_rating: Option<f32>,
}

impl PortfolioSummary {
    pub fn from_listings<'a>(listings: impl IntoIterator<Item = &'a Hostel>) -> Self {
        let mut summary = PortfolioSummary {
            listings: 0,
            verified: 0,
            available_rooms: 0,
            average_rating: None,
        };
        let mut rating_sum = 0.0;
        let mut rated = 0u32;

        for hostel in listings {
            summary.listings += 1;
            summary.available_rooms += u64::from(hostel.available_rooms);
            if hostel.verified {
                summary.verified += 1;
            }
            if hostel.reviews > 0 {
                rating_sum += hostel.rating;
                rated += 1;
            }
        }

        if rated > 0 {
            summary.average_rating = Some(rating_sum / rated as f32);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingError;
    use crate::models::RentType;

    #[test]
    fn insert_rejects_duplicates_and_broken_listings() {
        let mut catalog = ListingCatalog::seeded();
        let copy = catalog.get("1").cloned().unwrap();
        assert_eq!(
            catalog.insert(copy.clone()),
            Err(CatalogError::DuplicateId("1".into()))
        );

        let mut broken = copy;
        broken.id = "9".into();
        broken.rent_type = RentType::Monthly;
        broken.monthly_price = None;
        broken.accepts_monthly_payment = false;
        assert_eq!(
            catalog.insert(broken),
            Err(CatalogError::InvalidListing {
                id: "9".into(),
                source: ListingError::MissingMonthlyPrice(RentType::Monthly),
            })
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut catalog = ListingCatalog::seeded();
        let mut extra = catalog.get("2").cloned().unwrap();
        extra.id = "0".into();
        catalog.insert(extra).unwrap();

        let ids: Vec<_> = catalog.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "0"]);
    }

    #[test]
    fn shortlist_toggles_and_follows_catalog_order() {
        let catalog = ListingCatalog::seeded();
        let mut saved = Shortlist::new();
        assert!(saved.toggle("3"));
        assert!(saved.toggle("1"));
        assert!(saved.toggle("missing"));
        assert!(!saved.toggle("missing"));

        let ids: Vec<_> = saved
            .listings(&catalog)
            .into_iter()
            .map(|h| h.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn portfolio_counts_owner_listings() {
        let catalog = ListingCatalog::seeded();
        let summary = catalog.portfolio("owner1");
        assert_eq!(summary.listings, 1);
        assert_eq!(summary.available_rooms, 12);
        assert_eq!(summary.average_rating, Some(4.5));

        let empty = catalog.portfolio("nobody");
        assert_eq!(empty.listings, 0);
        assert_eq!(empty.average_rating, None);
    }

    #[test]
    fn room_total_does_not_overflow() {
        let mut big = mock::seed().remove(0);
        big.available_rooms = u32::MAX;
        let mut other = big.clone();
        other.id = "big-2".into();

        let summary = PortfolioSummary::from_listings([&big, &other]);
        assert_eq!(summary.available_rooms, 2 * u64::from(u32::MAX));
    }
}
