//! # JSON File Store
//!
//! Provides a concrete implementation of the [`DocumentStore`] trait that
//! keeps each collection in a single JSON file under a configured root
//! directory.
//!
//! This module ensures that:
//! - the root directory is created on demand,
//! - collection names are sanitized (no `/` or `..` traversal),
//! - writes go to a temporary file first and are renamed into place, so a
//!   crash mid-write never leaves a truncated collection behind.
//!
//! The on-disk shape of `<root>/<collection>.json` is an object mapping
//! document id to document, mirroring what a hosted document database
//! returns for a collection fetch. Suitable for single-host deployments.
//!
//! # Example
//! ```rust,no_run
//! use festa_web::store::json_store::JsonFileStore;
//! use festa_web::store::port::DocumentStore;
//! use serde_json::json;
//!
//! let store = JsonFileStore::new("./data");
//! store.put("leads", "l1", &json!({"name": "Ana"})).unwrap();
//! assert!(store.get("leads", "l1").unwrap().is_some());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde_json::Value;

use super::port::{merge_into, DocumentStore};

/// Stores collections as JSON files on the local filesystem.
///
/// A single process-wide lock serializes read-modify-write cycles; the
/// traffic this service sees does not warrant per-collection locking.
pub struct JsonFileStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a new [`JsonFileStore`] rooted at the given directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the configured root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        let safe = collection.replace(['/', '\\'], "_").replace("..", "_");
        self.root.join(format!("{safe}.json"))
    }

    fn read_collection(&self, collection: &str) -> Result<BTreeMap<String, Value>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = fs::read(&path).with_context(|| format!("read {:?}", &path))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse {:?}", &path))
    }

    fn write_collection(&self, collection: &str, docs: &BTreeMap<String, Value>) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| format!("create {:?}", &self.root))?;
        let path = self.collection_path(collection);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(docs)?;
        fs::write(&tmp, bytes).with_context(|| format!("write {:?}", &tmp))?;
        fs::rename(&tmp, &path).with_context(|| format!("rename {:?} -> {:?}", &tmp, &path))?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.read_collection(collection)?.remove(id))
    }

    fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.read_collection(collection)?.into_values().collect())
    }

    fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut docs = self.read_collection(collection)?;
        docs.insert(id.to_string(), doc.clone());
        self.write_collection(collection, &docs)
    }

    fn merge(&self, collection: &str, id: &str, patch: &Value) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut docs = self.read_collection(collection)?;
        match docs.get_mut(id) {
            Some(doc) => merge_into(doc, patch),
            None => {
                docs.insert(id.to_string(), patch.clone());
            }
        }
        self.write_collection(collection, &docs)
    }

    fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut docs = self.read_collection(collection)?;
        if docs.remove(id).is_some() {
            self.write_collection(collection, &docs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_root() -> PathBuf {
        let mut p = std::env::temp_dir();
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("json_file_store-test-{stamp}"));
        p
    }

    #[test]
    fn put_then_get_roundtrips() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("leads", "l1", &json!({"name": "Ana", "email": "a@b.c"}))?;
        let doc = store.get("leads", "l1")?;
        assert_eq!(doc, Some(json!({"name": "Ana", "email": "a@b.c"})));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn missing_collection_reads_as_empty() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        assert_eq!(store.get("nothing", "x")?, None);
        assert!(store.list("nothing")?.is_empty());
        Ok(())
    }

    #[test]
    fn list_returns_all_documents() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("photos", "p1", &json!({"n": 1}))?;
        store.put("photos", "p2", &json!({"n": 2}))?;
        store.put("other", "x", &json!({"n": 99}))?;

        let docs = store.list("photos")?;
        assert_eq!(docs.len(), 2);

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn put_replaces_whole_document() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("photos", "p1", &json!({"a": 1, "b": 2}))?;
        store.put("photos", "p1", &json!({"a": 9}))?;

        assert_eq!(store.get("photos", "p1")?, Some(json!({"a": 9})));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn merge_keeps_absent_fields_and_creates_missing_docs() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("settings", "site", &json!({"eventName": "X", "logoUrl": "old"}))?;
        store.merge("settings", "site", &json!({"logoUrl": "new"}))?;
        assert_eq!(
            store.get("settings", "site")?,
            Some(json!({"eventName": "X", "logoUrl": "new"}))
        );

        store.merge("settings", "fresh", &json!({"a": 1}))?;
        assert_eq!(store.get("settings", "fresh")?, Some(json!({"a": 1})));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn delete_removes_and_tolerates_absent_ids() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("leads", "l1", &json!({"n": 1}))?;
        store.delete("leads", "l1")?;
        assert_eq!(store.get("leads", "l1")?, None);

        store.delete("leads", "never-existed")?;

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn collection_names_are_sanitized() -> Result<()> {
        let root = unique_temp_root();
        let store = JsonFileStore::new(&root);

        store.put("../escape", "x", &json!({"n": 1}))?;
        assert!(root.join("__escape.json").exists());
        assert_eq!(store.get("../escape", "x")?, Some(json!({"n": 1})));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn data_survives_a_new_store_instance() -> Result<()> {
        let root = unique_temp_root();
        {
            let store = JsonFileStore::new(&root);
            store.put("leads", "l1", &json!({"name": "Ana"}))?;
        }
        let reopened = JsonFileStore::new(&root);
        assert_eq!(reopened.get("leads", "l1")?, Some(json!({"name": "Ana"})));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }
}
