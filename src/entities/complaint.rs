//! Complaint entity - A waste issue reported by a resident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a complaint. Transitions only move forward:
/// `pending -> assigned -> resolved`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    /// Submitted, awaiting a worker assignment.
    Pending,
    /// A worker has been assigned.
    Assigned,
    /// Closed; the owner has been awarded the resolution bonus.
    Resolved,
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
        };
        f.write_str(text)
    }
}

/// A waste-management complaint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Unique identifier.
    pub id: String,
    /// Id of the submitting account.
    pub user_id: String,
    /// Name of the submitter, snapshotted at submission time.
    pub user_name: String,
    /// Photo reference; a placeholder path when no photo was supplied.
    pub photo: String,
    /// Free-text location of the issue.
    pub location: String,
    /// Free-text description of the issue.
    pub description: String,
    /// Current lifecycle state.
    pub status: ComplaintStatus,
    /// Id of the assigned worker, set on assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_worker: Option<String>,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
