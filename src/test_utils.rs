//! Shared test utilities.
//!
//! Helpers for setting up an in-memory store and creating test records with
//! sensible defaults.

use crate::{
    config::AdminCredentials,
    core::{complaints, session},
    entities::{Account, Complaint, Role},
};
use crate::storage::MemoryStore;

/// The default admin credential pair, matching the historical constants.
#[must_use]
pub fn test_admin() -> AdminCredentials {
    AdminCredentials::default()
}

/// Registers a test account and returns it. Registration also makes the
/// account the active session.
///
/// # Defaults
/// * password: `"hunter2"`
/// * role: `user`
#[allow(clippy::unwrap_used)]
pub fn create_test_account(store: &MemoryStore, name: &str, email: &str) -> Account {
    session::register(store, name, email, "hunter2", Role::User).unwrap()
}

/// Submits a test complaint with a default description and no photo.
#[allow(clippy::unwrap_used)]
pub fn create_test_complaint(store: &MemoryStore, owner: &Account, location: &str) -> Complaint {
    complaints::submit_complaint(store, owner, location, "Test waste issue", None).unwrap()
}
