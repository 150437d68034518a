use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{GenderRestriction, Hostel, RentType};

/// Ceiling of the dashboard's price slider
pub const DEFAULT_MAX_ANNUAL_PRICE: i64 = 500_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GenderFilter {
    #[default]
    All,
    Only(GenderRestriction),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RentTypeFilter {
    #[default]
    All,
    Annual,
    Monthly,
}

impl RentTypeFilter {
    /// "annual" and "monthly" both match listings offering both.
    pub fn accepts(&self, rent_type: RentType) -> bool {
        match self {
            RentTypeFilter::All => true,
            RentTypeFilter::Annual => rent_type.offers_annual(),
            RentTypeFilter::Monthly => rent_type.offers_monthly(),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(GenderFilter::All),
            "female-only" => Ok(GenderFilter::Only(GenderRestriction::FemaleOnly)),
            "male-only" => Ok(GenderFilter::Only(GenderRestriction::MaleOnly)),
            "mixed" => Ok(GenderFilter::Only(GenderRestriction::Mixed)),
            other => anyhow::bail!("unknown gender filter: {other}"),
        }
    }
}

impl FromStr for RentTypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RentTypeFilter::All),
            "annual" => Ok(RentTypeFilter::Annual),
            "monthly" => Ok(RentTypeFilter::Monthly),
            other => anyhow::bail!("unknown rent type filter: {other}"),
        }
    }
}

/// Search parameters for the browse view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    /// Matched case-insensitively against name and city
    pub query: String,
    pub gender: GenderFilter,
    pub rent_type: RentTypeFilter,
    /// Inclusive
    pub max_annual_price: i64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            gender: GenderFilter::All,
            rent_type: RentTypeFilter::All,
            max_annual_price: DEFAULT_MAX_ANNUAL_PRICE,
        }
    }
}

impl ListingFilter {
    pub fn matches(&self, hostel: &Hostel) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            if !hostel.name.to_lowercase().contains(&needle)
                && !hostel.city.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let GenderFilter::Only(wanted) = self.gender {
            if hostel.gender_restriction != wanted {
                return false;
            }
        }

        if !self.rent_type.accepts(hostel.rent_type) {
            return false;
        }

        (0..=self.max_annual_price).contains(&hostel.annual_price)
    }

    /// Keep the matching listings, in their given order.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Hostel>
    where
        I: IntoIterator<Item = &'a Hostel>,
    {
        listings.into_iter().filter(|h| self.matches(h)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;

    #[test]
    fn rent_type_uses_set_membership() {
        assert!(RentTypeFilter::Annual.accepts(RentType::Both));
        assert!(RentTypeFilter::Monthly.accepts(RentType::Both));
        assert!(!RentTypeFilter::Monthly.accepts(RentType::Annual));
        assert!(!RentTypeFilter::Annual.accepts(RentType::Monthly));
    }

    #[test]
    fn query_matches_name_or_city_case_insensitively() {
        let seed = mock::seed();
        let by_city = ListingFilter {
            query: "AKOKA".into(),
            ..Default::default()
        };
        let names: Vec<_> = by_city.apply(&seed).into_iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Safe Haven Female Hostel"]);

        let by_name = ListingFilter {
            query: "hub".into(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&seed).len(), 1);
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let seed = mock::seed();
        let filter = ListingFilter {
            max_annual_price: 220_000,
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&seed).into_iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn gender_and_rent_filters_combine() {
        let seed = mock::seed();
        let filter = ListingFilter {
            gender: GenderFilter::Only(GenderRestriction::Mixed),
            rent_type: RentTypeFilter::Monthly,
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&seed).into_iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn filters_parse_from_dashboard_values() {
        assert_eq!("all".parse::<GenderFilter>().unwrap(), GenderFilter::All);
        assert_eq!(
            "female-only".parse::<GenderFilter>().unwrap(),
            GenderFilter::Only(GenderRestriction::FemaleOnly)
        );
        assert_eq!("monthly".parse::<RentTypeFilter>().unwrap(), RentTypeFilter::Monthly);
        assert!("both".parse::<RentTypeFilter>().is_err());
    }
}
