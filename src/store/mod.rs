//! Hosted document store boundary: the port, the JSON-file adapter, and
//! the typed repositories the handlers talk to.

pub mod json_store;
pub mod port;
pub mod repo;

pub use json_store::JsonFileStore;
pub use port::DocumentStore;
pub use repo::{LeadError, LeadRepo, PhotoRepo, SettingsRepo};
