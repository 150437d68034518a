//! Static reference data: regions and their institutions, academic levels,
//! amenity tags and common cities used by the signup and listing forms.

use serde::Serialize;

/// A region with the institutions located in it
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub institutions: &'static [&'static str],
}

pub const REGIONS: &[Region] = &[
    Region {
        name: "Lagos",
        institutions: &[
            "University of Lagos (UNILAG)",
            "Lagos State University (LASU)",
            "Yaba College of Technology (YABATECH)",
            "Lagos State Polytechnic",
            "Federal College of Education (Technical)",
            "Nigerian Institute of Journalism",
        ],
    },
    Region {
        name: "Ogun",
        institutions: &[
            "Federal University of Agriculture, Abeokuta (FUNAAB)",
            "Olabisi Onabanjo University",
            "Covenant University",
            "Bells University of Technology",
            "Gateway Polytechnic",
        ],
    },
    Region {
        name: "Oyo",
        institutions: &[
            "University of Ibadan (UI)",
            "Obafemi Awolowo University (OAU)",
            "Lead City University",
            "The Polytechnic, Ibadan",
            "Federal College of Education (Special), Oyo",
        ],
    },
    Region {
        name: "Abuja (FCT)",
        institutions: &[
            "University of Abuja",
            "Baze University",
            "Nile University",
            "Federal Polytechnic, Bida",
            "National Open University of Nigeria (NOUN)",
        ],
    },
    Region {
        name: "Rivers",
        institutions: &[
            "University of Port Harcourt",
            "Rivers State University",
            "Ken Saro-Wiwa Polytechnic",
            "Captain Elechi Amadi Polytechnic",
        ],
    },
    Region {
        name: "Kano",
        institutions: &[
            "Bayero University Kano (BUK)",
            "Kano University of Science and Technology",
            "Kano State Polytechnic",
            "Federal College of Education, Kano",
        ],
    },
    Region {
        name: "Kaduna",
        institutions: &[
            "Ahmadu Bello University (ABU)",
            "Kaduna State University",
            "Kaduna Polytechnic",
            "Federal College of Education, Zaria",
        ],
    },
    Region {
        name: "Plateau",
        institutions: &[
            "University of Jos",
            "Plateau State University",
            "Federal College of Veterinary and Medical Laboratory Technology",
            "Plateau State Polytechnic",
        ],
    },
];

pub const ACADEMIC_LEVELS: &[&str] = &[
    "100L", "200L", "300L", "400L", "500L", "600L", "ND1", "ND2", "HND1", "HND2", "Year 1",
    "Year 2", "Year 3", "Year 4",
];

pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Water Supply",
    "Electricity",
    "Kitchen",
    "Security/Gate",
    "Furnished",
    "Parking",
    "Study Room",
    "Common Room",
    "Laundry",
    "Generator",
    "Air Conditioning",
];

const COMMON_CITIES: &[(&str, &[&str])] = &[
    (
        "Lagos",
        &[
            "Yaba",
            "Akoka",
            "Surulere",
            "Ikeja",
            "Victoria Island",
            "Ikoyi",
            "Lekki",
            "Ajah",
            "Gbagada",
            "Ketu",
            "Mushin",
            "Alaba",
            "Oshodi",
        ],
    ),
    (
        "Ogun",
        &["Abeokuta", "Ijebu-Ode", "Sagamu", "Ota", "Ilaro", "Ayetoro", "Iperu"],
    ),
    (
        "Oyo",
        &["Ibadan", "Ogbomoso", "Oyo", "Iseyin", "Saki", "Eruwa", "Igboho"],
    ),
    (
        "Abuja (FCT)",
        &["Garki", "Wuse", "Maitama", "Asokoro", "Gwarinpa", "Kubwa", "Nyanya", "Karu"],
    ),
    (
        "Rivers",
        &["Port Harcourt", "Obio-Akpor", "Eleme", "Ikwerre", "Oyigbo", "Okrika"],
    ),
    (
        "Kano",
        &["Kano Metropolitan", "Fagge", "Dala", "Gwale", "Tarauni", "Nassarawa"],
    ),
    (
        "Kaduna",
        &["Kaduna", "Zaria", "Kafanchan", "Sabon Gari", "Chikun"],
    ),
    ("Plateau", &["Jos", "Bukuru", "Vom", "Pankshin", "Shendam"]),
];

pub fn find_region(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

/// Institutions in `region`, empty when the region is unknown.
pub fn institutions_for(region: &str) -> &'static [&'static str] {
    find_region(region).map(|r| r.institutions).unwrap_or(&[])
}

pub fn common_cities(region: &str) -> &'static [&'static str] {
    COMMON_CITIES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

/// Type-ahead over the common cities of a region.
pub fn search_cities(region: &str, query: &str) -> Vec<&'static str> {
    matching(common_cities(region), query)
}

/// Type-ahead over the institutions of a region.
pub fn search_institutions(region: &str, query: &str) -> Vec<&'static str> {
    matching(institutions_for(region), query)
}

fn matching(candidates: &'static [&'static str], query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_cities_and_institutions() {
        assert_eq!(REGIONS.len(), 8);
        for region in REGIONS {
            assert!(!region.institutions.is_empty(), "{}", region.name);
            assert!(!common_cities(region.name).is_empty(), "{}", region.name);
        }
    }

    #[test]
    fn unknown_region_yields_nothing() {
        assert!(find_region("Atlantis").is_none());
        assert!(institutions_for("Atlantis").is_empty());
        assert!(search_cities("Atlantis", "").is_empty());
    }

    #[test]
    fn type_ahead_is_case_insensitive() {
        assert_eq!(search_cities("Lagos", "YAB"), vec!["Yaba"]);
        assert_eq!(
            search_institutions("Lagos", "poly"),
            vec!["Lagos State Polytechnic"]
        );
        assert_eq!(search_cities("Plateau", "").len(), 5);
    }
}
