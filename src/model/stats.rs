//! Aggregate counters shown on the admin dashboard.

use serde::{Deserialize, Serialize};

use super::lead::Lead;

/// Dashboard summary: lead and photo totals plus the most recent leads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_leads: usize,
    pub recent_leads: Vec<Lead>,
    pub total_photos: usize,
}
