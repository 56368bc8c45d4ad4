//! Redeem-code entity - An audit record of a credit redemption.
//!
//! Records are write-only: generation appends one here and to the owning
//! account's code list, and nothing in the system ever consumes or
//! validates a code afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated redeem code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCode {
    /// Unique identifier of this record.
    pub id: String,
    /// Id of the account that redeemed credits.
    pub user_id: String,
    /// The 8-character uppercase alphanumeric code.
    pub code: String,
    /// Generation timestamp.
    pub created_at: DateTime<Utc>,
}
