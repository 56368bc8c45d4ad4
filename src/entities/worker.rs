//! Worker entity - Static reference data for the worker directory.
//!
//! Workers are loaded from `config.toml` and never persisted or mutated;
//! complaints reference them by id only.

use serde::Deserialize;

/// A waste-collection worker with per-material scrap prices.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Worker {
    /// Roster identifier, referenced by `Complaint::assigned_worker`.
    pub id: String,
    /// Worker name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Price paid per kg of steel.
    pub price_steel: u32,
    /// Price paid per kg of plastic.
    pub price_plastic: u32,
    /// Price paid per kg of paper.
    pub price_paper: u32,
    /// Average customer rating, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of completed pickups, when known.
    #[serde(default)]
    pub completed_jobs: Option<u32>,
}
