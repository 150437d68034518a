use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// How rent on a listing can be paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RentType {
    #[default]
    Annual,
    Monthly,
    Both,
}

impl RentType {
    pub fn offers_annual(&self) -> bool {
        matches!(self, RentType::Annual | RentType::Both)
    }

    pub fn offers_monthly(&self) -> bool {
        matches!(self, RentType::Monthly | RentType::Both)
    }
}

/// Who a hostel admits. Also used for a student's preferred housing policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GenderRestriction {
    FemaleOnly,
    MaleOnly,
    #[default]
    Mixed,
}

/// A hostel listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub region: String,
    pub city: String,
    pub served_institutions: Vec<String>,
    pub address: String,
    pub rent_type: RentType,
    /// Whole naira, no minor units
    pub annual_price: i64,
    pub monthly_price: Option<i64>,
    pub available_rooms: u32,
    pub gender_restriction: GenderRestriction,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub video: Option<String>,
    pub description: String,
    pub rating: f32,
    pub reviews: u32,
    pub verified: bool,
    pub accepts_monthly_payment: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Hostel {
    /// Checks the pricing rules every listing must satisfy.
    pub fn check_invariants(&self) -> Result<(), ListingError> {
        match (self.rent_type.offers_monthly(), self.monthly_price) {
            (true, None) => return Err(ListingError::MissingMonthlyPrice(self.rent_type)),
            (false, Some(_)) => return Err(ListingError::UnexpectedMonthlyPrice),
            _ => {}
        }
        if self.accepts_monthly_payment && self.monthly_price.is_none() {
            return Err(ListingError::MonthlyPaymentWithoutPrice);
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ListingError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}
