//! Dashboard metrics - read-only reductions over the stored collections.

use crate::{
    core::{complaints, reports, session},
    entities::ComplaintStatus,
    errors::Result,
    storage::Storage,
};

/// Name reported when the registry holds no accounts.
const CHAMPION_SENTINEL: &str = "No users yet";

/// Aggregate complaint and report counts for the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplaintStats {
    /// All complaints ever submitted.
    pub total: usize,
    /// Awaiting a worker assignment.
    pub pending: usize,
    /// Assigned, not yet resolved.
    pub assigned: usize,
    /// Resolved.
    pub resolved: usize,
    /// Reports not yet handled.
    pub open_reports: usize,
}

/// The account with the highest credit balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenChampion {
    /// Display name, or the sentinel when no account qualifies.
    pub name: String,
    /// The champion's balance.
    pub credits: i64,
}

/// Computes the aggregate counts in one pass per collection.
pub fn complaint_stats(store: &dyn Storage) -> Result<ComplaintStats> {
    let all = complaints::get_all_complaints(store)?;
    let mut stats = ComplaintStats {
        total: all.len(),
        pending: 0,
        assigned: 0,
        resolved: 0,
        open_reports: 0,
    };
    for complaint in &all {
        match complaint.status {
            ComplaintStatus::Pending => stats.pending += 1,
            ComplaintStatus::Assigned => stats.assigned += 1,
            ComplaintStatus::Resolved => stats.resolved += 1,
        }
    }
    stats.open_reports = reports::get_all_reports(store)?
        .iter()
        .filter(|r| !r.handled)
        .count();
    Ok(stats)
}

/// Finds the account with the strictly highest credit balance.
///
/// A left-to-right scan seeded with a zero-credit sentinel: the first
/// account encountered wins ties, and a zero-credit account never displaces
/// the sentinel.
pub fn green_champion(store: &dyn Storage) -> Result<GreenChampion> {
    let mut champion = GreenChampion {
        name: CHAMPION_SENTINEL.to_string(),
        credits: 0,
    };
    for account in session::get_all_accounts(store)? {
        if account.credits > champion.credits {
            champion = GreenChampion {
                name: account.name,
                credits: account.credits,
            };
        }
    }
    Ok(champion)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{complaints::assign_worker, reports::file_report, session::adjust_credits};
    use crate::storage::MemoryStore;
    use crate::test_utils::{create_test_account, create_test_complaint};

    #[test]
    fn champion_defaults_to_the_sentinel() {
        let store = MemoryStore::new();
        let champion = green_champion(&store).unwrap();
        assert_eq!(champion.name, "No users yet");
        assert_eq!(champion.credits, 0);
    }

    #[test]
    fn a_zero_credit_account_never_displaces_the_sentinel() {
        let store = MemoryStore::new();
        create_test_account(&store, "John", "john@example.com");
        let champion = green_champion(&store).unwrap();
        assert_eq!(champion.name, "No users yet");
    }

    #[test]
    fn highest_balance_wins_and_first_wins_ties() {
        let store = MemoryStore::new();
        let john = create_test_account(&store, "John", "john@example.com");
        let sarah = create_test_account(&store, "Sarah", "sarah@example.com");
        let mike = create_test_account(&store, "Mike", "mike@example.com");
        adjust_credits(&store, &john.id, 78).unwrap();
        adjust_credits(&store, &sarah.id, 120).unwrap();
        adjust_credits(&store, &mike.id, 120).unwrap();

        let champion = green_champion(&store).unwrap();
        // Sarah registered before Mike; strict comparison keeps her on top
        assert_eq!(champion.name, "Sarah");
        assert_eq!(champion.credits, 120);
    }

    #[test]
    fn stats_count_by_status_and_open_reports() {
        let store = MemoryStore::new();
        let owner = create_test_account(&store, "John", "john@example.com");
        create_test_complaint(&store, &owner, "Main St");
        let second = create_test_complaint(&store, &owner, "Sector 15");
        assign_worker(&store, &second.id, "1").unwrap();
        file_report(&store, &owner, &second.id, "no pickup yet").unwrap();

        let stats = complaint_stats(&store).unwrap();
        assert_eq!(
            stats,
            ComplaintStats {
                total: 2,
                pending: 1,
                assigned: 1,
                resolved: 0,
                open_reports: 1,
            }
        );
    }
}
