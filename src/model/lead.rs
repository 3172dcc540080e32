//! Registrant records captured by the landing-page form.

use serde::{Deserialize, Serialize};

/// A registrant's submitted contact/identity record.
///
/// Created once on form submission and never mutated afterwards. Email is
/// stored lowercased and is unique across leads; phone and CPF are stored
/// as masked display strings (see [`crate::model::mask`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    /// Creation timestamp, epoch milliseconds.
    pub created_at: i64,
}

/// Form payload for a new registration. Identity and timestamp are assigned
/// by the repository.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub cpf: String,
}
