/// Reserved administrator credentials from environment variables
pub mod admin;

/// Worker roster loading from config.toml
pub mod workers;

pub use admin::AdminCredentials;

use std::path::PathBuf;

/// Data directory for the file-backed store, from `ECOWASTE_DATA_DIR`
/// with a local `data` directory as the default.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var("ECOWASTE_DATA_DIR")
        .map_or_else(|_| PathBuf::from("data"), PathBuf::from)
}
