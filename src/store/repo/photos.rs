//! # Photo Repository
//!
//! Typed access to the `photos` collection backing the landing-page
//! carousel: add, list, delete, and visibility toggling.
//!
//! On the first read of an empty collection the repository seeds four
//! sample photos (remote stock URLs), so a fresh deployment renders a
//! populated carousel before the first admin upload. Seeding can be
//! switched off via configuration.

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::error::NotFoundError;
use crate::model::Photo;
use crate::store::port::DocumentStore;

const COLLECTION: &str = "photos";

/// Sample carousel content for fresh deployments.
fn seed_photos() -> Vec<Photo> {
    let urls = [
        "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&q=80&w=800",
        "https://images.unsplash.com/photo-1545127398-14699f92334b?auto=format&fit=crop&q=80&w=800",
        "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?auto=format&fit=crop&q=80&w=800",
        "https://images.unsplash.com/photo-1493225255756-d9584f8606e9?auto=format&fit=crop&q=80&w=800",
    ];
    urls.iter()
        .enumerate()
        .map(|(i, url)| Photo {
            id: format!("seed-{}", i + 1),
            url: url.to_string(),
            title: format!("Festa {}", i + 1),
            active: true,
        })
        .collect()
}

/// Repository over the `photos` collection.
#[derive(Clone)]
pub struct PhotoRepo {
    store: Arc<dyn DocumentStore>,
    seed: bool,
}

impl PhotoRepo {
    pub fn new(store: Arc<dyn DocumentStore>, seed: bool) -> Self {
        Self { store, seed }
    }

    /// Returns all photos. An empty collection is seeded first when seeding
    /// is enabled.
    pub fn list(&self) -> Result<Vec<Photo>> {
        let docs = self.store.list(COLLECTION)?;
        if docs.is_empty() && self.seed {
            let seeded = seed_photos();
            for photo in &seeded {
                self.store
                    .put(COLLECTION, &photo.id, &serde_json::to_value(photo)?)?;
            }
            return Ok(seeded);
        }
        let mut photos: Vec<Photo> = docs
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?;
        photos.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(photos)
    }

    /// Returns only the photos shown on the landing page.
    pub fn list_active(&self) -> Result<Vec<Photo>> {
        Ok(self.list()?.into_iter().filter(|p| p.active).collect())
    }

    /// Adds a photo, active by default.
    pub fn add(&self, url: String, title: String) -> Result<Photo> {
        let photo = Photo {
            id: Uuid::new_v4().to_string(),
            url,
            title,
            active: true,
        };
        self.store
            .put(COLLECTION, &photo.id, &serde_json::to_value(&photo)?)?;
        Ok(photo)
    }

    /// Removes a photo.
    ///
    /// # Errors
    /// Returns [`NotFoundError`] (wrapped in `anyhow`) when the id is absent.
    pub fn delete(&self, id: &str) -> Result<()> {
        if self.store.get(COLLECTION, id)?.is_none() {
            return Err(NotFoundError::new("photo").into());
        }
        self.store.delete(COLLECTION, id)
    }

    /// Flips a photo's visibility and returns the updated record.
    ///
    /// # Errors
    /// Returns [`NotFoundError`] (wrapped in `anyhow`) when the id is absent.
    pub fn toggle_active(&self, id: &str) -> Result<Photo> {
        let Some(doc) = self.store.get(COLLECTION, id)? else {
            return Err(NotFoundError::new("photo").into());
        };
        let mut photo: Photo = serde_json::from_value(doc)?;
        photo.active = !photo.active;
        self.store
            .put(COLLECTION, id, &serde_json::to_value(&photo)?)?;
        Ok(photo)
    }

    /// Total number of photos (seeding applies as for [`Self::list`]).
    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::port::test_support::MemoryStore;

    fn seeded_repo() -> PhotoRepo {
        PhotoRepo::new(Arc::new(MemoryStore::new()), true)
    }

    #[test]
    fn empty_collection_is_seeded_once() {
        let repo = seeded_repo();

        let first = repo.list().unwrap();
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|p| p.active));

        // seeding persisted; a second read does not duplicate
        let second = repo.list().unwrap();
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let repo = PhotoRepo::new(Arc::new(MemoryStore::new()), false);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn add_creates_an_active_photo() {
        let repo = PhotoRepo::new(Arc::new(MemoryStore::new()), false);
        let photo = repo
            .add("data:image/jpeg;base64,AAA".to_string(), "Palco".to_string())
            .unwrap();

        assert!(photo.active);
        assert_eq!(photo.title, "Palco");

        let all = repo.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, photo.id);
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let repo = PhotoRepo::new(Arc::new(MemoryStore::new()), false);
        let photo = repo.add("u".into(), "t".into()).unwrap();

        repo.delete(&photo.id).unwrap();
        assert!(repo.list().unwrap().is_empty());

        let err = repo.delete(&photo.id).unwrap_err();
        assert!(err.downcast_ref::<NotFoundError>().is_some());
    }

    #[test]
    fn toggle_flips_visibility_and_filters_landing_list() {
        let repo = seeded_repo();
        let photos = repo.list().unwrap();
        let target = &photos[0];

        let toggled = repo.toggle_active(&target.id).unwrap();
        assert!(!toggled.active);

        let active = repo.list_active().unwrap();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|p| p.id != target.id));

        let back = repo.toggle_active(&target.id).unwrap();
        assert!(back.active);
        assert_eq!(repo.list_active().unwrap().len(), 4);
    }

    #[test]
    fn toggle_missing_photo_is_not_found() {
        let repo = PhotoRepo::new(Arc::new(MemoryStore::new()), false);
        let err = repo.toggle_active("nope").unwrap_err();
        assert!(err.downcast_ref::<NotFoundError>().is_some());
    }
}
