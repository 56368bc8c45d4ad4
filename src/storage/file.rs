//! File-backed storage: one UTF-8 JSON file per key under a data directory.
//!
//! This is the durable stand-in for the original browser storage. Writes are
//! plain file replacements with no locking; concurrent processes overwrite
//! each other at collection granularity, which is the accepted consistency
//! model for this system.

use super::Storage;
use crate::errors::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A [`Storage`] persisting each key to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are fixed names or `awarenessVideo_<id>`; anything resembling a
        // path must not escape the data directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(Error::Storage {
                message: format!("invalid storage key: {key:?}"),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key)?, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
