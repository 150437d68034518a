use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Hostel;
use crate::router::Route;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentType {
    #[default]
    Annual,
    Monthly,
}

/// What pressing "apply" leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Student opted into monthly payments on a listing that takes them
    PaymentSetup(Route),
    /// Application confirmation is shown in place
    ApplicationModal,
}

/// View state for a single listing
#[derive(Debug, Clone)]
pub struct ListingDetail {
    hostel: Hostel,
    photo_index: usize,
    saved: bool,
    application_open: bool,
    payment_type: PaymentType,
    monthly_interest: bool,
}

impl ListingDetail {
    pub fn new(hostel: Hostel) -> Self {
        Self {
            hostel,
            photo_index: 0,
            saved: false,
            application_open: false,
            payment_type: PaymentType::Annual,
            monthly_interest: false,
        }
    }

    pub fn hostel(&self) -> &Hostel {
        &self.hostel
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.hostel.photos.get(self.photo_index).map(String::as_str)
    }

    pub fn next_photo(&mut self) -> usize {
        let count = self.hostel.photos.len();
        if count > 0 {
            self.photo_index = (self.photo_index + 1) % count;
        }
        self.photo_index
    }

    pub fn prev_photo(&mut self) -> usize {
        let count = self.hostel.photos.len();
        if count > 0 {
            self.photo_index = (self.photo_index + count - 1) % count;
        }
        self.photo_index
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select_photo(&mut self, index: usize) -> bool {
        if index < self.hostel.photos.len() {
            self.photo_index = index;
            true
        } else {
            false
        }
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn toggle_saved(&mut self) -> bool {
        self.saved = !self.saved;
        self.saved
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    /// Monthly is only selectable when the listing has a monthly price.
    pub fn select_payment_type(&mut self, payment_type: PaymentType) -> bool {
        if payment_type == PaymentType::Monthly && self.hostel.monthly_price.is_none() {
            return false;
        }
        self.payment_type = payment_type;
        true
    }

    /// Price for the selected payment type
    pub fn selected_price(&self) -> i64 {
        match self.payment_type {
            PaymentType::Annual => self.hostel.annual_price,
            PaymentType::Monthly => self
                .hostel
                .monthly_price
                .unwrap_or(self.hostel.annual_price),
        }
    }

    pub fn monthly_interest(&self) -> bool {
        self.monthly_interest
    }

    pub fn set_monthly_interest(&mut self, interested: bool) {
        self.monthly_interest = interested;
    }

    pub fn application_open(&self) -> bool {
        self.application_open
    }

    pub fn open_application(&mut self) {
        self.application_open = true;
    }

    pub fn close_application(&mut self) {
        self.application_open = false;
    }

    pub fn apply(&mut self) -> ApplyOutcome {
        if self.monthly_interest && self.hostel.accepts_monthly_payment {
            debug!(id = %self.hostel.id, "monthly applicant sent to payment setup");
            ApplyOutcome::PaymentSetup(Route::PaymentSetup)
        } else {
            self.application_open = true;
            ApplyOutcome::ApplicationModal
        }
    }

    pub fn share_text(&self) -> String {
        format!(
            "Check out {} - {}, {}",
            self.hostel.name, self.hostel.city, self.hostel.region
        )
    }
}
