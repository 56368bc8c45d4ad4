//! Well-known storage keys. The literal values match the original
//! key-value layout so existing snapshots remain readable.

/// Registry of all accounts (ordered sequence of `Account`).
pub const USERS: &str = "users";

/// Active session snapshot (single optional `Account`).
pub const CURRENT_USER: &str = "currentUser";

/// All complaints (ordered sequence of `Complaint`).
pub const COMPLAINTS: &str = "complaints";

/// All service reports (ordered sequence of `Report`).
pub const REPORTS: &str = "reports";

/// All generated redeem codes (ordered sequence of `RedeemCode`).
pub const REDEEM_CODES: &str = "redeemCodes";

/// Sentinel guarding the one-time seed-data bootstrap.
pub const DATA_INITIALIZED: &str = "dataInitialized";

/// Per-account flag recording that the awareness video was watched.
#[must_use]
pub fn video_seen(account_id: &str) -> String {
    format!("awarenessVideo_{account_id}")
}
