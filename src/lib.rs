//! `EcoWaste` - The persisted-state core of a municipal waste-complaint
//! tracker.
//!
//! Residents submit complaints with a photo and location, administrators
//! assign workers and resolve them, and residents accumulate credits
//! redeemable via generated codes. All state lives in a flat key-value store
//! of JSON collection snapshots behind the [`storage::Storage`] trait; every
//! mutation is a synchronous read-modify-write of a whole collection.

#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration: worker roster, admin credentials, data directory
pub mod config;
/// Core business logic - session, complaints, reports, redeem codes, metrics
pub mod core;
/// Persisted record types and static reference data
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Key-value persistence boundary and its backends
pub mod storage;

#[cfg(test)]
pub mod test_utils;
