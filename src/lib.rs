//! Client-side core of a student hostel marketplace: signup and listing
//! wizards, the listing catalogue and its search filter, the listing detail
//! view, and the session-aware route guard.

pub mod app;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod models;
pub mod payments;
pub mod reference;
pub mod router;
pub mod session;
pub mod wizard;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, CatalogError, ListingError, PaymentError, WizardError};
