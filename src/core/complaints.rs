//! Complaint business logic - Submission by residents, worker assignment and
//! resolution by administrators.
//!
//! Status transitions are forward-only: `pending -> assigned -> resolved`.
//! Resolution awards the owner a fixed credit bonus through the session
//! store's delta primitive; re-resolving is rejected so the bonus cannot be
//! double-awarded.

use crate::{
    core::session,
    entities::{Account, Complaint, ComplaintStatus},
    errors::{Error, Result},
    storage::{self, Storage, keys},
};
use chrono::Utc;

/// Credits awarded to the owner when their complaint is resolved.
pub const RESOLUTION_AWARD: i64 = 10;

/// Photo reference stored when no photo was supplied.
pub const PLACEHOLDER_PHOTO: &str = "/placeholder.svg";

/// Retrieves all complaints, in submission order.
pub fn get_all_complaints(store: &dyn Storage) -> Result<Vec<Complaint>> {
    storage::read_collection(store, keys::COMPLAINTS)
}

/// Retrieves the complaints submitted by one account.
pub fn get_complaints_for_user(store: &dyn Storage, user_id: &str) -> Result<Vec<Complaint>> {
    Ok(get_all_complaints(store)?
        .into_iter()
        .filter(|c| c.user_id == user_id)
        .collect())
}

/// Submits a new complaint for `owner`.
///
/// Location and description are required; a missing photo falls back to
/// [`PLACEHOLDER_PHOTO`]. The complaint is stamped with a generated id, the
/// owner's id and name, the current time, and `pending` status.
pub fn submit_complaint(
    store: &dyn Storage,
    owner: &Account,
    location: &str,
    description: &str,
    photo: Option<String>,
) -> Result<Complaint> {
    let location = location.trim();
    let description = description.trim();
    if location.is_empty() || description.is_empty() {
        return Err(Error::Validation {
            message: "location and description are required".to_string(),
        });
    }

    let complaint = Complaint {
        id: crate::core::new_id(),
        user_id: owner.id.clone(),
        user_name: owner.name.clone(),
        photo: photo.unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
        location: location.to_string(),
        description: description.to_string(),
        status: ComplaintStatus::Pending,
        assigned_worker: None,
        created_at: Utc::now(),
    };

    let mut complaints = get_all_complaints(store)?;
    complaints.push(complaint.clone());
    storage::write_collection(store, keys::COMPLAINTS, &complaints)?;
    tracing::info!(id = %complaint.id, owner = %owner.id, "complaint submitted");
    Ok(complaint)
}

/// Assigns a worker to a `pending` complaint, moving it to `assigned`.
///
/// An empty worker selection is a validation error and performs no mutation.
/// Assigning a complaint that is not `pending` violates the forward-only
/// transition rule and fails with [`Error::InvalidTransition`].
pub fn assign_worker(
    store: &dyn Storage,
    complaint_id: &str,
    worker_id: &str,
) -> Result<Complaint> {
    let worker_id = worker_id.trim();
    if worker_id.is_empty() {
        return Err(Error::Validation {
            message: "a worker must be selected".to_string(),
        });
    }

    let updated = update_complaint(store, complaint_id, |complaint| {
        if complaint.status != ComplaintStatus::Pending {
            return Err(Error::InvalidTransition {
                id: complaint.id.clone(),
                from: complaint.status,
                to: ComplaintStatus::Assigned,
            });
        }
        complaint.status = ComplaintStatus::Assigned;
        complaint.assigned_worker = Some(worker_id.to_string());
        Ok(())
    })?;
    tracing::info!(id = %updated.id, worker = worker_id, "worker assigned");
    Ok(updated)
}

/// Resolves a complaint and awards [`RESOLUTION_AWARD`] credits to its owner.
///
/// Works from `pending` or `assigned`; an already `resolved` complaint is
/// rejected. An owner missing from the registry (the built-in admin, or a
/// record from a foreign snapshot) is tolerated: the complaint still
/// resolves, no credits move, and the incident is logged.
pub fn resolve_complaint(store: &dyn Storage, complaint_id: &str) -> Result<Complaint> {
    let resolved = update_complaint(store, complaint_id, |complaint| {
        if complaint.status == ComplaintStatus::Resolved {
            return Err(Error::InvalidTransition {
                id: complaint.id.clone(),
                from: ComplaintStatus::Resolved,
                to: ComplaintStatus::Resolved,
            });
        }
        complaint.status = ComplaintStatus::Resolved;
        Ok(())
    })?;

    match session::adjust_credits(store, &resolved.user_id, RESOLUTION_AWARD) {
        Ok(_) => {}
        Err(Error::AccountNotFound { id }) => {
            tracing::warn!(account = %id, complaint = %resolved.id, "owner not in registry, no credits awarded");
        }
        Err(err) => return Err(err),
    }

    tracing::info!(id = %resolved.id, "complaint resolved");
    Ok(resolved)
}

/// Applies `mutate` to one complaint and rewrites the collection snapshot.
fn update_complaint<F>(store: &dyn Storage, complaint_id: &str, mutate: F) -> Result<Complaint>
where
    F: FnOnce(&mut Complaint) -> Result<()>,
{
    let mut complaints = get_all_complaints(store)?;
    let Some(complaint) = complaints.iter_mut().find(|c| c.id == complaint_id) else {
        return Err(Error::ComplaintNotFound {
            id: complaint_id.to_string(),
        });
    };
    mutate(complaint)?;
    let updated = complaint.clone();
    storage::write_collection(store, keys::COMPLAINTS, &complaints)?;
    Ok(updated)
}
