//! Redeem-code generation.
//!
//! Redemption trades 100 credits for an 8-character uppercase alphanumeric
//! code. The code is appended to the account's redeem list and recorded in
//! the `redeemCodes` audit collection. Codes are write-only: nothing in the
//! system ever consumes or validates one afterwards.

use crate::{
    core::session,
    entities::RedeemCode,
    errors::{Error, Result},
    storage::{self, Storage, keys},
};
use chrono::Utc;
use rand::Rng;

/// Credits debited per generated code; also the minimum balance to redeem.
pub const REDEEM_COST: i64 = 100;

/// Length of a generated code.
pub const CODE_LENGTH: usize = 8;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a fresh code from `rng`.
pub fn new_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Retrieves every generated code record, in generation order.
pub fn get_all_redeem_codes(store: &dyn Storage) -> Result<Vec<RedeemCode>> {
    storage::read_collection(store, keys::REDEEM_CODES)
}

/// Generates a redeem code for the account, debiting [`REDEEM_COST`] credits.
///
/// Gated on a balance of at least [`REDEEM_COST`]; a short balance fails with
/// [`Error::InsufficientCredits`] and performs no mutation. The debit goes
/// through the session store's delta primitive, so the balance invariant is
/// enforced in one place.
pub fn generate_redeem_code(store: &dyn Storage, account_id: &str) -> Result<RedeemCode> {
    let account = session::get_account_by_id(store, account_id)?.ok_or_else(|| {
        Error::AccountNotFound {
            id: account_id.to_string(),
        }
    })?;
    if account.credits < REDEEM_COST {
        return Err(Error::InsufficientCredits {
            balance: account.credits,
            required: REDEEM_COST,
        });
    }

    let code = new_code(&mut rand::thread_rng());
    session::adjust_credits(store, account_id, -REDEEM_COST)?;
    session::append_redeem_code(store, account_id, &code)?;

    let record = RedeemCode {
        id: crate::core::new_id(),
        user_id: account_id.to_string(),
        code,
        created_at: Utc::now(),
    };
    let mut records = get_all_redeem_codes(store)?;
    records.push(record.clone());
    storage::write_collection(store, keys::REDEEM_CODES, &records)?;

    tracing::info!(account = account_id, code = %record.code, "redeem code generated");
    Ok(record)
}
