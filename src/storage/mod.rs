//! Key-value persistence boundary.
//!
//! Every collection is stored as one JSON snapshot under a well-known key, and
//! every mutation is a synchronous read-modify-write of the whole collection.
//! There is no partial update and no cross-process coordination: two
//! uncoordinated writers overwrite each other at collection granularity
//! (last writer wins). The [`Storage`] trait is injected into every core
//! operation so callers never touch ambient global state.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};

/// A flat string-keyed store of serialized snapshots.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads a collection snapshot.
///
/// An absent key reads as the empty collection. A malformed snapshot also
/// degrades to the empty collection rather than propagating a fatal error;
/// the incident is logged. Backend I/O failures still propagate.
pub fn read_collection<T: DeserializeOwned>(store: &dyn Storage, key: &str) -> Result<Vec<T>> {
    let Some(text) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&text) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key, %err, "malformed collection snapshot, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serializes and stores a full collection snapshot under `key`.
pub fn write_collection<T: Serialize>(store: &dyn Storage, key: &str, items: &[T]) -> Result<()> {
    let text = serde_json::to_string(items)?;
    store.put(key, &text)
}

/// Reads a single-record snapshot, such as the session under
/// [`keys::CURRENT_USER`]. Absent and malformed values both read as `None`.
pub fn read_record<T: DeserializeOwned>(store: &dyn Storage, key: &str) -> Result<Option<T>> {
    let Some(text) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&text) {
        Ok(record) => Ok(Some(record)),
        Err(err) => {
            tracing::warn!(key, %err, "malformed record snapshot, treating as absent");
            Ok(None)
        }
    }
}

/// Serializes and stores a single record under `key`.
pub fn write_record<T: Serialize>(store: &dyn Storage, key: &str, record: &T) -> Result<()> {
    let text = serde_json::to_string(record)?;
    store.put(key, &text)
}

/// Removes every well-known key, including the seed sentinel.
///
/// Per-account video flags are keyed by account id and cannot be enumerated
/// through the flat [`Storage`] interface, so they survive a clear.
pub fn clear_all(store: &dyn Storage) -> Result<()> {
    for key in [
        keys::USERS,
        keys::CURRENT_USER,
        keys::COMPLAINTS,
        keys::REPORTS,
        keys::REDEEM_CODES,
        keys::DATA_INITIALIZED,
    ] {
        store.remove(key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{Account, Role};

    fn test_account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            name: "Test User".to_string(),
            email: format!("{id}@example.com"),
            role: Role::User,
            credits: 0,
            redeem_codes: Vec::new(),
            password_hash: None,
        }
    }

    #[test]
    fn absent_collection_reads_as_empty() {
        let store = MemoryStore::new();
        let accounts: Vec<Account> = read_collection(&store, keys::USERS).unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn malformed_collection_degrades_to_empty() {
        let store = MemoryStore::new();
        store.put(keys::USERS, "{not json").unwrap();
        let accounts: Vec<Account> = read_collection(&store, keys::USERS).unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn collection_round_trips() {
        let store = MemoryStore::new();
        let written = vec![test_account("a"), test_account("b")];
        write_collection(&store, keys::USERS, &written).unwrap();
        let read: Vec<Account> = read_collection(&store, keys::USERS).unwrap();
        assert_eq!(read, written);
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.put(keys::CURRENT_USER, "42").unwrap();
        let session: Option<Account> = read_record(&store, keys::CURRENT_USER).unwrap();
        assert!(session.is_none());
    }

    #[test]
    fn snapshots_keep_the_original_field_layout() {
        let store = MemoryStore::new();
        write_collection(&store, keys::USERS, &[test_account("a")]).unwrap();
        let text = store.get(keys::USERS).unwrap().unwrap();
        assert!(text.contains("\"redeemCodes\""));
        assert!(text.contains("\"role\":\"user\""));
    }

    #[test]
    fn clear_all_removes_known_keys() {
        let store = MemoryStore::new();
        write_collection(&store, keys::USERS, &[test_account("a")]).unwrap();
        store.put(keys::DATA_INITIALIZED, "true").unwrap();
        clear_all(&store).unwrap();
        assert!(store.get(keys::USERS).unwrap().is_none());
        assert!(store.get(keys::DATA_INITIALIZED).unwrap().is_none());
    }
}
