use crate::models::{GenderRestriction, Hostel, RentType};
use tracing::info;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Listings the client ships with until a listing service exists
pub fn seed() -> Vec<Hostel> {
    info!("📋 Loading mock hostel listings");

    vec![
        Hostel {
            id: "1".to_string(),
            owner_id: "owner1".to_string(),
            name: "Green Valley Hostel".to_string(),
            region: "Lagos".to_string(),
            city: "Yaba".to_string(),
            served_institutions: strings(&[
                "University of Lagos (UNILAG)",
                "Yaba College of Technology (YABATECH)",
            ]),
            address: "15 Herbert Macaulay Street, Yaba, Lagos".to_string(),
            rent_type: RentType::Both,
            annual_price: 180_000,
            monthly_price: Some(18_000),
            available_rooms: 12,
            gender_restriction: GenderRestriction::Mixed,
            amenities: strings(&[
                "WiFi",
                "Water Supply",
                "Electricity",
                "Kitchen",
                "Security/Gate",
                "Parking",
                "Study Room",
                "Common Room",
            ]),
            photos: strings(&[
                "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg",
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg",
                "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg",
                "https://images.pexels.com/photos/271816/pexels-photo-271816.jpeg",
            ]),
            video: None,
            description: "Mixed hostel a short walk from UNILAG and YABATECH.".to_string(),
            rating: 4.5,
            reviews: 28,
            verified: true,
            accepts_monthly_payment: true,
            created_at: None,
        },
        Hostel {
            id: "2".to_string(),
            owner_id: "owner2".to_string(),
            name: "Safe Haven Female Hostel".to_string(),
            region: "Lagos".to_string(),
            city: "Akoka".to_string(),
            served_institutions: strings(&["University of Lagos (UNILAG)"]),
            address: "23 Akoka Road, Akoka, Lagos".to_string(),
            rent_type: RentType::Annual,
            annual_price: 220_000,
            monthly_price: None,
            available_rooms: 8,
            gender_restriction: GenderRestriction::FemaleOnly,
            amenities: strings(&[
                "WiFi",
                "Water Supply",
                "Electricity",
                "Furnished",
                "Security/Gate",
                "Laundry",
            ]),
            photos: strings(&[
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg",
            ]),
            video: None,
            description: "Furnished female-only rooms behind a gated compound.".to_string(),
            rating: 4.8,
            reviews: 35,
            verified: true,
            accepts_monthly_payment: false,
            created_at: None,
        },
        Hostel {
            id: "3".to_string(),
            owner_id: "owner3".to_string(),
            name: "Tech Hub Residence".to_string(),
            region: "Lagos".to_string(),
            city: "Yaba".to_string(),
            served_institutions: strings(&[
                "Yaba College of Technology (YABATECH)",
                "University of Lagos (UNILAG)",
            ]),
            address: "8 Technology Drive, Yaba, Lagos".to_string(),
            rent_type: RentType::Both,
            annual_price: 250_000,
            monthly_price: Some(24_000),
            available_rooms: 20,
            gender_restriction: GenderRestriction::Mixed,
            amenities: strings(&[
                "WiFi",
                "Water Supply",
                "Electricity",
                "Kitchen",
                "Study Room",
                "Generator",
                "Air Conditioning",
            ]),
            photos: strings(&[
                "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg",
            ]),
            video: None,
            description: "Air-conditioned rooms with a 24-hour study room and backup power."
                .to_string(),
            rating: 4.3,
            reviews: 42,
            verified: true,
            accepts_monthly_payment: true,
            created_at: None,
        },
    ]
}
