//! Report business logic - Filing and handling of service reports.
//!
//! Reports are independent of the referenced complaint's status. Handling is
//! one-directional: the flag is set once and never cleared, and handling an
//! already-handled report is a no-op in outcome (the collection is still
//! rewritten, matching the snapshot model).

use crate::{
    entities::{Account, Report},
    errors::{Error, Result},
    storage::{self, Storage, keys},
};
use chrono::Utc;

/// Retrieves all reports, in filing order.
pub fn get_all_reports(store: &dyn Storage) -> Result<Vec<Report>> {
    storage::read_collection(store, keys::REPORTS)
}

/// Files a report from `owner` against a complaint.
pub fn file_report(
    store: &dyn Storage,
    owner: &Account,
    complaint_id: &str,
    description: &str,
) -> Result<Report> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Error::Validation {
            message: "a description is required".to_string(),
        });
    }

    let report = Report {
        id: crate::core::new_id(),
        user_id: owner.id.clone(),
        user_name: owner.name.clone(),
        complaint_id: complaint_id.to_string(),
        description: description.to_string(),
        handled: false,
        created_at: Utc::now(),
    };

    let mut reports = get_all_reports(store)?;
    reports.push(report.clone());
    storage::write_collection(store, keys::REPORTS, &reports)?;
    tracing::info!(id = %report.id, complaint = complaint_id, "report filed");
    Ok(report)
}

/// Marks a report as handled.
pub fn handle_report(store: &dyn Storage, report_id: &str) -> Result<Report> {
    let mut reports = get_all_reports(store)?;
    let Some(report) = reports.iter_mut().find(|r| r.id == report_id) else {
        return Err(Error::ReportNotFound {
            id: report_id.to_string(),
        });
    };
    report.handled = true;
    let updated = report.clone();
    storage::write_collection(store, keys::REPORTS, &reports)?;
    tracing::info!(id = %updated.id, "report handled");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_utils::{create_test_account, create_test_complaint};

    #[test]
    fn filing_requires_a_description() {
        let store = MemoryStore::new();
        let owner = create_test_account(&store, "John", "john@example.com");

        let result = file_report(&store, &owner, "complaint-1", "   ");
        assert!(matches!(result, Err(Error::Validation { message: _ })));
        assert!(get_all_reports(&store).unwrap().is_empty());
    }

    #[test]
    fn filed_reports_start_unhandled() {
        let store = MemoryStore::new();
        let owner = create_test_account(&store, "John", "john@example.com");
        let complaint = create_test_complaint(&store, &owner, "Main St");

        let report = file_report(&store, &owner, &complaint.id, "worker did not show up").unwrap();

        assert!(!report.handled);
        assert_eq!(report.user_name, "John");
        assert_eq!(report.complaint_id, complaint.id);
        assert_eq!(get_all_reports(&store).unwrap(), vec![report]);
    }

    #[test]
    fn handling_is_idempotent_in_outcome() {
        let store = MemoryStore::new();
        let owner = create_test_account(&store, "John", "john@example.com");
        let report = file_report(&store, &owner, "complaint-1", "still there").unwrap();

        let handled = handle_report(&store, &report.id).unwrap();
        assert!(handled.handled);

        let again = handle_report(&store, &report.id).unwrap();
        assert!(again.handled);
        assert_eq!(get_all_reports(&store).unwrap().len(), 1);
    }

    #[test]
    fn handling_a_missing_report_fails() {
        let store = MemoryStore::new();
        let result = handle_report(&store, "missing");
        assert!(matches!(result, Err(Error::ReportNotFound { id: _ })));
    }
}
