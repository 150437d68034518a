use thiserror::Error;

use crate::models::{RentType, Role};

/// A listing record that breaks the pricing rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListingError {
    #[error("a {0:?} listing needs a monthly price")]
    MissingMonthlyPrice(RentType),
    #[error("an annual-only listing cannot carry a monthly price")]
    UnexpectedMonthlyPrice,
    #[error("monthly payments accepted but no monthly price set")]
    MonthlyPaymentWithoutPrice,
    #[error("rating {0} is outside 0-5")]
    RatingOutOfRange(f32),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WizardError {
    #[error("step {step} is incomplete")]
    StepIncomplete { step: u8 },
    #[error("submit called at step {step} of {steps}")]
    NotAtFinalStep { step: u8, steps: u8 },
    #[error("draft was already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Listing(#[from] ListingError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("listing {0} already exists")]
    DuplicateId(String),
    #[error("listing {id} rejected: {source}")]
    InvalidListing {
        id: String,
        #[source]
        source: ListingError,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("no payment method selected")]
    NoMethodSelected,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no one is signed in")]
    NotSignedIn,
    #[error("role {0:?} cannot perform this action")]
    NotAuthorized(Role),
    #[error("no listing with id {0}")]
    UnknownListing(String),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("login failed: {0:#}")]
    Login(anyhow::Error),
}
