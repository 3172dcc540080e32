//! # Lead Repository
//!
//! Typed access to the `leads` collection: registration with duplicate-email
//! protection, newest-first listing, and substring search for the admin list.
//!
//! Emails are stored lowercased and are unique across the collection; a
//! second registration with the same address (any casing) is rejected
//! without touching the store. Phone and CPF values are normalized to their
//! display masks before storage.

use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use uuid::Uuid;

use crate::model::mask::{mask_cpf, mask_phone};
use crate::model::{Lead, NewLead};
use crate::store::port::DocumentStore;
use crate::time::Clock;

const COLLECTION: &str = "leads";

/// Registration failures a caller can act on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    /// The email already belongs to a registered lead.
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// The form arrived without a usable name or email.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Repository over the `leads` collection.
#[derive(Clone)]
pub struct LeadRepo {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl LeadRepo {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Registers a new lead.
    ///
    /// # Errors
    /// Returns [`LeadError::DuplicateEmail`] (wrapped in `anyhow`) when the
    /// email is already registered, [`LeadError::MissingField`] when name or
    /// email is blank.
    pub fn add(&self, new: NewLead) -> Result<Lead> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(LeadError::MissingField { field: "name" }.into());
        }
        let email = new.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LeadError::MissingField { field: "email" }.into());
        }

        let existing = self.list()?;
        if existing.iter().any(|l| l.email == email) {
            return Err(LeadError::DuplicateEmail { email }.into());
        }

        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone: mask_phone(&new.phone),
            cpf: mask_cpf(&new.cpf),
            created_at: self.clock.now_millis(),
        };
        self.store
            .put(COLLECTION, &lead.id, &serde_json::to_value(&lead)?)?;
        Ok(lead)
    }

    /// Returns all leads, newest first.
    pub fn list(&self) -> Result<Vec<Lead>> {
        let mut leads: Vec<Lead> = self
            .store
            .list(COLLECTION)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?;
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    /// Case-insensitive substring search over name and email, newest first.
    pub fn search(&self, query: &str) -> Result<Vec<Lead>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.list();
        }
        Ok(self
            .list()?
            .into_iter()
            .filter(|l| l.name.to_lowercase().contains(&q) || l.email.contains(&q))
            .collect())
    }

    /// Total number of registered leads.
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.list(COLLECTION)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::port::test_support::MemoryStore;
    use crate::time::clock::test_support::FixedClock;

    fn repo_at(millis: i64) -> LeadRepo {
        LeadRepo::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedClock::at_millis(millis)),
        )
    }

    fn new_lead(name: &str, email: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: email.to_string(),
            phone: "11987654321".to_string(),
            cpf: "12345678900".to_string(),
        }
    }

    #[test]
    fn add_masks_and_timestamps() {
        let repo = repo_at(1_700_000_000_000);
        let lead = repo.add(new_lead("Ana", "Ana@Example.COM")).unwrap();

        assert_eq!(lead.email, "ana@example.com");
        assert_eq!(lead.phone, "(11) 98765-4321");
        assert_eq!(lead.cpf, "123.456.789-00");
        assert_eq!(lead.created_at, 1_700_000_000_000);
        assert!(!lead.id.is_empty());
    }

    #[test]
    fn duplicate_email_is_rejected_without_writing() {
        let repo = repo_at(0);
        repo.add(new_lead("Ana", "ana@example.com")).unwrap();

        let err = repo.add(new_lead("Other", "ANA@example.com")).unwrap_err();
        let lead_err = err.downcast_ref::<LeadError>().expect("LeadError");
        assert_eq!(
            *lead_err,
            LeadError::DuplicateEmail {
                email: "ana@example.com".to_string()
            }
        );
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let repo = repo_at(0);
        let err = repo.add(new_lead("  ", "a@b.c")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LeadError>(),
            Some(LeadError::MissingField { field: "name" })
        ));

        let err = repo.add(new_lead("Ana", "   ")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LeadError>(),
            Some(LeadError::MissingField { field: "email" })
        ));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn list_is_newest_first() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        for (millis, email) in [(100, "a@x.c"), (300, "c@x.c"), (200, "b@x.c")] {
            let repo = LeadRepo::new(store.clone(), Arc::new(FixedClock::at_millis(millis)));
            repo.add(new_lead("N", email)).unwrap();
        }

        let repo = LeadRepo::new(store, Arc::new(FixedClock::at_millis(0)));
        let emails: Vec<_> = repo.list().unwrap().into_iter().map(|l| l.email).collect();
        assert_eq!(emails, vec!["c@x.c", "b@x.c", "a@x.c"]);
    }

    #[test]
    fn search_matches_name_and_email() {
        let repo = repo_at(0);
        repo.add(new_lead("Ana Souza", "ana@festa.com")).unwrap();
        repo.add(new_lead("Bruno Lima", "bruno@outro.com")).unwrap();

        let by_name: Vec<_> = repo.search("souza").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ana Souza");

        let by_email = repo.search("OUTRO").unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Bruno Lima");

        assert_eq!(repo.search("  ").unwrap().len(), 2);
        assert!(repo.search("zzz").unwrap().is_empty());
    }
}
