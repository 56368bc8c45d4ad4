//! Report entity - A user complaint about unresolved service on an existing
//! complaint. Independent of the complaint's own status; a one-shot
//! `handled` flag is its entire lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service report filed against a complaint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique identifier.
    pub id: String,
    /// Id of the filing account.
    pub user_id: String,
    /// Name of the filer, snapshotted at filing time.
    pub user_name: String,
    /// Id of the complaint this report is about.
    pub complaint_id: String,
    /// What went wrong.
    pub description: String,
    /// Set once by an administrator, never cleared.
    #[serde(default)]
    pub handled: bool,
    /// Filing timestamp.
    pub created_at: DateTime<Utc>,
}
