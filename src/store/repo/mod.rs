//! Typed repositories over the document-store port.

pub mod leads;
pub mod photos;
pub mod settings;

pub use leads::{LeadError, LeadRepo};
pub use photos::PhotoRepo;
pub use settings::SettingsRepo;
