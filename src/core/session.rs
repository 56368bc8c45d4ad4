//! Session and identity store - Authentication, registration, and account
//! mutation.
//!
//! The `users` registry is the single source of truth for account state. The
//! `currentUser` session snapshot is a derived view: every mutation goes
//! through a single private write path that rewrites the registry first and then
//! refreshes the snapshot when it points at the mutated account. No caller
//! ever writes the two locations independently, so they cannot diverge.

use crate::{
    config::AdminCredentials,
    entities::{Account, Role},
    errors::{Error, Result},
    storage::{self, Storage, keys},
};
use base64::Engine;
use sha2::{Digest, Sha256};

/// Id of the built-in administrator identity. The admin is a constant, not a
/// registry entry; credit operations against this id report account-not-found.
pub const ADMIN_ID: &str = "admin-1";

const ADMIN_NAME: &str = "Admin User";

fn admin_account(email: &str) -> Account {
    Account {
        id: ADMIN_ID.to_string(),
        name: ADMIN_NAME.to_string(),
        email: email.to_string(),
        role: Role::Admin,
        credits: 0,
        redeem_codes: Vec::new(),
        password_hash: None,
    }
}

/// Hashes a password for storage: SHA-256, base64 encoded (URL-safe, no
/// padding).
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}

/// Retrieves the full account registry, in registration order.
pub fn get_all_accounts(store: &dyn Storage) -> Result<Vec<Account>> {
    storage::read_collection(store, keys::USERS)
}

/// Finds a registry entry by id.
pub fn get_account_by_id(store: &dyn Storage, id: &str) -> Result<Option<Account>> {
    Ok(get_all_accounts(store)?.into_iter().find(|a| a.id == id))
}

/// Reads the active session, if any. An absent or malformed snapshot reads
/// as no session.
pub fn current_account(store: &dyn Storage) -> Result<Option<Account>> {
    storage::read_record(store, keys::CURRENT_USER)
}

/// Authenticates a credential pair and opens a session.
///
/// The reserved admin pair always succeeds and yields the built-in admin
/// identity. Otherwise the registry is scanned by email; accounts carrying a
/// password hash verify the password, accounts written before hashes existed
/// accept any password. Returns `Ok(None)` when no account matches or the
/// password is wrong; the registry is never mutated by a login.
pub fn login(
    store: &dyn Storage,
    admin: &AdminCredentials,
    email: &str,
    password: &str,
) -> Result<Option<Account>> {
    if email == admin.email && password == admin.password {
        let account = admin_account(email);
        storage::write_record(store, keys::CURRENT_USER, &account)?;
        tracing::info!("admin session opened");
        return Ok(Some(account));
    }

    let Some(account) = get_all_accounts(store)?
        .into_iter()
        .find(|a| a.email == email)
    else {
        return Ok(None);
    };

    if let Some(hash) = &account.password_hash {
        if *hash != hash_password(password) {
            tracing::debug!(email, "login rejected: wrong password");
            return Ok(None);
        }
    }

    storage::write_record(store, keys::CURRENT_USER, &account)?;
    tracing::info!(id = %account.id, "session opened");
    Ok(Some(account))
}

/// Registers a new account and makes it the active session.
///
/// Fails with [`Error::EmailTaken`] when the email is already registered,
/// leaving the registry untouched. The new account starts with zero credits
/// and no redeem codes.
pub fn register(
    store: &dyn Storage,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Account> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(Error::Validation {
            message: "name and email are required".to_string(),
        });
    }

    let mut accounts = get_all_accounts(store)?;
    if accounts.iter().any(|a| a.email == email) {
        return Err(Error::EmailTaken {
            email: email.to_string(),
        });
    }

    let account = Account {
        id: crate::core::new_id(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        credits: 0,
        redeem_codes: Vec::new(),
        password_hash: Some(hash_password(password)),
    };

    accounts.push(account.clone());
    storage::write_collection(store, keys::USERS, &accounts)?;
    storage::write_record(store, keys::CURRENT_USER, &account)?;
    tracing::info!(id = %account.id, "account registered");
    Ok(account)
}

/// Closes the active session. The registry is not touched.
pub fn logout(store: &dyn Storage) -> Result<()> {
    store.remove(keys::CURRENT_USER)
}

/// The single credit mutation primitive. Adds `delta` (which may be
/// negative) to the account's balance.
///
/// The balance invariant `credits >= 0` is enforced here and nowhere else:
/// an adjustment that would go negative fails with
/// [`Error::InsufficientCredits`] and performs no mutation.
pub fn adjust_credits(store: &dyn Storage, account_id: &str, delta: i64) -> Result<Account> {
    update_account(store, account_id, |account| {
        let next = account.credits + delta;
        if next < 0 {
            return Err(Error::InsufficientCredits {
                balance: account.credits,
                required: -delta,
            });
        }
        account.credits = next;
        Ok(())
    })
}

/// Appends a generated code to the account's redeem list.
pub fn append_redeem_code(store: &dyn Storage, account_id: &str, code: &str) -> Result<Account> {
    update_account(store, account_id, |account| {
        account.redeem_codes.push(code.to_string());
        Ok(())
    })
}

/// Applies `mutate` to the registry entry for `account_id`, persists the
/// registry, then refreshes the session snapshot if it carries the same id.
/// This is the only write path for account state.
fn update_account<F>(store: &dyn Storage, account_id: &str, mutate: F) -> Result<Account>
where
    F: FnOnce(&mut Account) -> Result<()>,
{
    let mut accounts = get_all_accounts(store)?;
    let Some(account) = accounts.iter_mut().find(|a| a.id == account_id) else {
        return Err(Error::AccountNotFound {
            id: account_id.to_string(),
        });
    };
    mutate(account)?;
    let updated = account.clone();
    storage::write_collection(store, keys::USERS, &accounts)?;

    if let Some(session) = current_account(store)? {
        if session.id == updated.id {
            storage::write_record(store, keys::CURRENT_USER, &updated)?;
        }
    }
    Ok(updated)
}

/// Records that the account has watched the awareness video.
pub fn mark_video_seen(store: &dyn Storage, account_id: &str) -> Result<()> {
    store.put(&keys::video_seen(account_id), "true")
}

/// Whether the account has watched the awareness video.
pub fn has_seen_video(store: &dyn Storage, account_id: &str) -> Result<bool> {
    Ok(store.get(&keys::video_seen(account_id))?.is_some())
}
