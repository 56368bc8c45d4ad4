//! Account entity - A registered user of the tracker.
//!
//! Accounts live in the `users` registry collection. The active session is a
//! snapshot of one of these records under the `currentUser` key; the registry
//! entry is the source of truth and the snapshot is derived from it.

use serde::{Deserialize, Serialize};

/// Access level of an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular resident: submits complaints, earns and redeems credits.
    User,
    /// Administrator: assigns workers, resolves complaints, awards credits.
    Admin,
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier within the registry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique within the registry.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Credit balance, never negative.
    #[serde(default)]
    pub credits: i64,
    /// Generated redeem codes, in generation order.
    #[serde(default)]
    pub redeem_codes: Vec<String>,
    /// SHA-256 password hash, base64 encoded. Absent on records written
    /// before password verification existed; such accounts accept any
    /// password at login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}
