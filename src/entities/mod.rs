//! Entity module - Contains the persisted record types and static reference data.
//! Persisted entities serialize field-for-field in camelCase so that stored
//! snapshots keep the original key-value layout.

pub mod account;
pub mod complaint;
pub mod redeem_code;
pub mod report;
pub mod worker;

pub use account::{Account, Role};
pub use complaint::{Complaint, ComplaintStatus};
pub use redeem_code::RedeemCode;
pub use report::Report;
pub use worker::Worker;
