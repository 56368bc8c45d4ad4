//! Core business logic - storage-backed operations over accounts,
//! complaints, reports, and redeem codes. All functions are synchronous,
//! take the storage backend explicitly, and return `Result` for error
//! handling; nothing here touches global state.

pub mod complaints;
pub mod redeem;
pub mod reports;
pub mod session;
pub mod stats;
pub mod workers;

use rand::Rng;

/// Generates an identifier for a new record: millisecond timestamp plus a
/// short random suffix so records created within the same millisecond still
/// get distinct ids.
pub(crate) fn new_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("{millis}-{suffix:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_within_a_burst() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| new_id()).collect();
        // Collisions would need the same millisecond and the same suffix;
        // a hundred draws should never collapse that far.
        assert!(ids.len() > 90);
    }
}
