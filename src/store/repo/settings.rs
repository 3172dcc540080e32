//! # Site Settings Repository
//!
//! The settings document is a singleton living at `("settings", "site")`.
//! It is created implicitly by the first save; loads before that return
//! the built-in defaults. Saves are merges, so a patch carrying only the
//! hero banner URL leaves every other field untouched.

use std::sync::Arc;

use anyhow::Result;

use crate::model::{SettingsPatch, SiteSettings};
use crate::store::port::DocumentStore;

const COLLECTION: &str = "settings";
const DOC_ID: &str = "site";

/// Repository over the singleton settings document.
#[derive(Clone)]
pub struct SettingsRepo {
    store: Arc<dyn DocumentStore>,
}

impl SettingsRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Loads the settings, falling back to defaults when nothing has been
    /// saved yet. Fields missing from a stored document (older writes)
    /// also fall back to their defaults.
    pub fn load(&self) -> Result<SiteSettings> {
        match self.store.get(COLLECTION, DOC_ID)? {
            Some(doc) => Ok(serde_json::from_value(doc)?),
            None => Ok(SiteSettings::default()),
        }
    }

    /// Merges a patch into the stored document and returns the result.
    pub fn save(&self, patch: &SettingsPatch) -> Result<SiteSettings> {
        self.store
            .merge(COLLECTION, DOC_ID, &serde_json::to_value(patch)?)?;
        self.load()
    }
}
