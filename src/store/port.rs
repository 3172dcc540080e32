//! # Document Store Port
//!
//! Defines an abstract hosted-document-store interface ([`DocumentStore`])
//! used by adapters such as the JSON file implementation.
//!
//! Documents are schemaless [`serde_json::Value`] objects addressed by
//! `(collection, id)`. Typed repositories sit on top of this port and own
//! (de)serialization of the domain records.
//!
//! # Example
//! ```rust,ignore
//! use festa_web::store::port::DocumentStore;
//! use serde_json::json;
//!
//! // Repository example (pseudo-code)
//! store.put("photos", "p1", &json!({"url": "data:...", "active": true}))?;
//! let all = store.list("photos")?;
//! ```

use anyhow::Result;
use serde_json::Value;

/// Document store abstraction (synchronous).
///
/// Adapters are expected to make `put`, `merge`, and `delete` durable before
/// returning, so a handler that observed `Ok` can promise the write survived.
pub trait DocumentStore: Send + Sync + 'static {
    /// Fetches a single document, or `None` if the id is absent.
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Returns every document in a collection, in unspecified order.
    fn list(&self, collection: &str) -> Result<Vec<Value>>;

    /// Creates or fully replaces a document.
    fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<()>;

    /// Shallow-merges `patch` into the document's top-level fields.
    ///
    /// Fields present in `patch` overwrite, fields absent are kept. When the
    /// document does not exist yet, the patch becomes the document.
    fn merge(&self, collection: &str, id: &str, patch: &Value) -> Result<()>;

    /// Deletes a document. Deleting an absent id is not an error.
    fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Applies the [`DocumentStore::merge`] semantics to two JSON values.
///
/// Shared by adapters so their merge behavior cannot drift apart.
pub fn merge_into(doc: &mut Value, patch: &Value) {
    match (doc, patch) {
        (Value::Object(doc_map), Value::Object(patch_map)) => {
            for (k, v) in patch_map {
                doc_map.insert(k.clone(), v.clone());
            }
        }
        (doc, patch) => *doc = patch.clone(),
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory `DocumentStore` for repository tests.
    #[derive(Default)]
    pub struct MemoryStore {
        collections: Mutex<HashMap<String, HashMap<String, Value>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DocumentStore for MemoryStore {
        fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
            let cols = self.collections.lock().unwrap();
            Ok(cols.get(collection).and_then(|c| c.get(id)).cloned())
        }

        fn list(&self, collection: &str) -> Result<Vec<Value>> {
            let cols = self.collections.lock().unwrap();
            Ok(cols
                .get(collection)
                .map(|c| c.values().cloned().collect())
                .unwrap_or_default())
        }

        fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<()> {
            let mut cols = self.collections.lock().unwrap();
            cols.entry(collection.to_string())
                .or_default()
                .insert(id.to_string(), doc.clone());
            Ok(())
        }

        fn merge(&self, collection: &str, id: &str, patch: &Value) -> Result<()> {
            let mut cols = self.collections.lock().unwrap();
            let col = cols.entry(collection.to_string()).or_default();
            match col.get_mut(id) {
                Some(doc) => merge_into(doc, patch),
                None => {
                    col.insert(id.to_string(), patch.clone());
                }
            }
            Ok(())
        }

        fn delete(&self, collection: &str, id: &str) -> Result<()> {
            let mut cols = self.collections.lock().unwrap();
            if let Some(col) = cols.get_mut(collection) {
                col.remove(id);
            }
            Ok(())
        }
    }
}
