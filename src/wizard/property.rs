use chrono::Utc;
use uuid::Uuid;

use crate::error::{ListingError, WizardError};
use crate::models::{FileRef, GenderRestriction, Hostel, RentType};
use crate::reference;
use crate::router::Route;
use crate::wizard::{toggle_selection, WizardForm};

pub const DEFAULT_MAX_PHOTOS: usize = 10;

/// New listing: basics, pricing, amenities and media, review.
#[derive(Debug, Clone)]
pub struct PropertyForm {
    owner_id: String,

    pub name: String,
    region: String,
    pub city: String,
    served_institutions: Vec<String>,
    pub address: String,

    pub rent_type: RentType,
    pub annual_price: i64,
    pub monthly_price: i64,
    pub available_rooms: u32,
    pub gender_restriction: GenderRestriction,
    pub accepts_monthly_payment: bool,

    amenities: Vec<String>,
    photos: Vec<FileRef>,
    video: Option<FileRef>,
    pub description: String,
    max_photos: usize,
}

impl PropertyForm {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self::with_photo_limit(owner_id, DEFAULT_MAX_PHOTOS)
    }

    pub fn with_photo_limit(owner_id: impl Into<String>, max_photos: usize) -> Self {
        Self {
            owner_id: owner_id.into(),
            name: String::new(),
            region: String::new(),
            city: String::new(),
            served_institutions: Vec::new(),
            address: String::new(),
            rent_type: RentType::Annual,
            annual_price: 0,
            monthly_price: 0,
            available_rooms: 1,
            gender_restriction: GenderRestriction::Mixed,
            accepts_monthly_payment: false,
            amenities: Vec::new(),
            photos: Vec::new(),
            video: None,
            description: String::new(),
            max_photos,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Changing region drops the city and institutions chosen for the old one.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.region {
            self.city.clear();
            self.served_institutions.clear();
        }
        self.region = region;
    }

    pub fn served_institutions(&self) -> &[String] {
        &self.served_institutions
    }

    pub fn toggle_institution(&mut self, institution: &str) -> bool {
        if !reference::institutions_for(&self.region).contains(&institution) {
            return false;
        }
        toggle_selection(&mut self.served_institutions, institution);
        true
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// Returns false for tags outside the amenity catalogue.
    pub fn toggle_amenity(&mut self, amenity: &str) -> bool {
        if !reference::AMENITIES.contains(&amenity) {
            return false;
        }
        toggle_selection(&mut self.amenities, amenity);
        true
    }

    pub fn photos(&self) -> &[FileRef] {
        &self.photos
    }

    /// Append photos up to the limit; extras are dropped. Returns how many were kept.
    pub fn add_photos(&mut self, files: impl IntoIterator<Item = FileRef>) -> usize {
        let room = self.max_photos.saturating_sub(self.photos.len());
        let before = self.photos.len();
        self.photos.extend(files.into_iter().take(room));
        self.photos.len() - before
    }

    pub fn remove_photo(&mut self, index: usize) -> Option<FileRef> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    pub fn video(&self) -> Option<&FileRef> {
        self.video.as_ref()
    }

    pub fn attach_video(&mut self, file: Option<FileRef>) {
        self.video = file;
    }
}

impl WizardForm for PropertyForm {
    type Output = Hostel;

    const NAME: &'static str = "add-property";

    fn missing_fields(&self, step: u8) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            1 => {
                if self.name.is_empty() {
                    missing.push("name");
                }
                if self.region.is_empty() {
                    missing.push("region");
                }
                if self.city.is_empty() {
                    missing.push("city");
                }
                if self.served_institutions.is_empty() {
                    missing.push("served_institutions");
                }
                if self.address.is_empty() {
                    missing.push("address");
                }
            }
            2 => {
                if self.annual_price <= 0 {
                    missing.push("annual_price");
                }
                if self.available_rooms < 1 {
                    missing.push("available_rooms");
                }
            }
            _ => {}
        }
        missing
    }

    fn finish(&self) -> Result<Hostel, WizardError> {
        // The monthly fields only exist on the form when monthly rent is offered
        let monthly_price = if self.rent_type.offers_monthly() {
            if self.monthly_price <= 0 {
                return Err(ListingError::MissingMonthlyPrice(self.rent_type).into());
            }
            Some(self.monthly_price)
        } else {
            None
        };
        let accepts_monthly_payment = self.accepts_monthly_payment && monthly_price.is_some();

        let hostel = Hostel {
            id: Uuid::new_v4().to_string(),
            owner_id: self.owner_id.clone(),
            name: self.name.clone(),
            region: self.region.clone(),
            city: self.city.clone(),
            served_institutions: self.served_institutions.clone(),
            address: self.address.clone(),
            rent_type: self.rent_type,
            annual_price: self.annual_price,
            monthly_price,
            available_rooms: self.available_rooms,
            gender_restriction: self.gender_restriction,
            amenities: self.amenities.clone(),
            photos: self.photos.iter().map(|p| p.name().to_string()).collect(),
            video: self.video.as_ref().map(|v| v.name().to_string()),
            description: self.description.clone(),
            rating: 0.0,
            reviews: 0,
            verified: false,
            accepts_monthly_payment,
            created_at: Some(Utc::now()),
        };
        hostel.check_invariants()?;
        Ok(hostel)
    }

    fn exit_route(&self) -> Route {
        Route::OwnerDashboard
    }

    fn destination(&self, _: &Hostel) -> Route {
        Route::OwnerDashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Retreat, Wizard};

    fn basics() -> PropertyForm {
        let mut form = PropertyForm::new("owner1");
        form.name = "Unity Lodge".into();
        form.set_region("Oyo");
        form.city = "Ibadan".into();
        form.address = "12 Bodija Road".into();
        form.toggle_institution("University of Ibadan (UI)");
        form
    }

    #[test]
    fn basics_step_lists_every_gap() {
        let form = PropertyForm::new("owner1");
        assert_eq!(
            form.missing_fields(1),
            vec!["name", "region", "city", "served_institutions", "address"]
        );
        assert!(basics().step_ready(1));
    }

    #[test]
    fn pricing_step_needs_price_and_a_room() {
        let mut form = basics();
        assert_eq!(form.missing_fields(2), vec!["annual_price"]);
        form.annual_price = 150_000;
        form.available_rooms = 0;
        assert_eq!(form.missing_fields(2), vec!["available_rooms"]);
        form.available_rooms = 4;
        assert!(form.step_ready(2));
    }

    #[test]
    fn photos_are_capped_and_removable() {
        let mut form = PropertyForm::with_photo_limit("owner1", 3);
        let kept = form.add_photos((0..5).map(|i| FileRef::new(format!("p{i}.jpg"))));
        assert_eq!(kept, 3);
        assert_eq!(form.add_photos([FileRef::new("late.jpg")]), 0);

        assert_eq!(form.remove_photo(1), Some(FileRef::new("p1.jpg")));
        assert_eq!(form.remove_photo(9), None);
        assert_eq!(form.add_photos([FileRef::new("late.jpg")]), 1);
        assert_eq!(form.photos().len(), 3);
    }

    #[test]
    fn unknown_amenities_are_ignored() {
        let mut form = basics();
        assert!(form.toggle_amenity("WiFi"));
        assert!(!form.toggle_amenity("Helipad"));
        assert_eq!(form.amenities(), ["WiFi"]);
    }

    #[test]
    fn back_from_first_step_returns_to_dashboard() {
        let mut wizard = Wizard::new(basics());
        assert_eq!(wizard.retreat(), Retreat::Exit(Route::OwnerDashboard));
    }

    #[test]
    fn monthly_listing_needs_monthly_price() {
        let mut form = basics();
        form.annual_price = 200_000;
        form.rent_type = RentType::Both;
        form.accepts_monthly_payment = true;

        let mut wizard = Wizard::new(form);
        while wizard.advance() {}
        assert_eq!(
            wizard.submit(),
            Err(WizardError::Listing(ListingError::MissingMonthlyPrice(
                RentType::Both
            )))
        );

        wizard.form_mut().monthly_price = 20_000;
        let hostel = wizard.submit().unwrap().record;
        assert_eq!(hostel.monthly_price, Some(20_000));
        assert!(hostel.accepts_monthly_payment);
        assert_eq!(hostel.owner_id, "owner1");
        assert!(!hostel.verified);
    }

    #[test]
    fn annual_listing_drops_monthly_fields() {
        let mut form = basics();
        form.annual_price = 120_000;
        form.monthly_price = 11_000;
        form.accepts_monthly_payment = true;
        form.add_photos([FileRef::new("front.jpg")]);
        form.attach_video(Some(FileRef::new("tour.mp4")));

        let mut wizard = Wizard::new(form);
        while wizard.advance() {}
        let hostel = wizard.submit().unwrap().record;
        assert_eq!(hostel.monthly_price, None);
        assert!(!hostel.accepts_monthly_payment);
        assert_eq!(hostel.photos, vec!["front.jpg".to_string()]);
        assert_eq!(hostel.video.as_deref(), Some("tour.mp4"));
        assert_eq!(hostel.check_invariants(), Ok(()));
    }
}
