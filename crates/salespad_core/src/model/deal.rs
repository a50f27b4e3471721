//! Deal domain model.
//!
//! # Responsibility
//! - Define the pipeline deal record and its create/update draft.
//! - Name the conventional stage vocabulary used by the pipeline board.
//!
//! # Invariants
//! - `value` and `probability` are canonical numerics; raw draft text is
//!   coerced before a record is stored.
//! - `stage` is stored verbatim; the store does not validate it against
//!   `STAGES`.
//! - `contact_id` is a soft reference and may dangle.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Conventional pipeline stages, in board display order.
pub const STAGES: [&str; 5] = [
    "prospect",
    "qualified",
    "proposal",
    "negotiation",
    "closed",
];

/// Default win probability assigned when a draft carries none.
pub const DEFAULT_PROBABILITY: i64 = 50;

/// A sales opportunity moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: RecordId,
    pub title: String,
    /// Monetary value in whole currency units.
    pub value: f64,
    /// Pipeline stage name, conventionally one of `STAGES`.
    pub stage: String,
    /// Soft reference to a contact; never validated for existence.
    pub contact_id: Option<RecordId>,
    /// Win probability in percent. Coerced, not range-clamped.
    pub probability: i64,
    /// Free-text close date as entered, e.g. `2026-09-30`.
    pub expected_close_date: String,
    pub notes: String,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds, store-assigned.
    pub updated_at: i64,
}

/// Caller-provided deal fields for create and update.
///
/// `value` and `probability` arrive as raw text and go through
/// parse-with-fallback coercion; `None` anywhere means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealDraft {
    pub title: Option<String>,
    pub value: Option<String>,
    pub stage: Option<String>,
    pub contact_id: Option<RecordId>,
    pub probability: Option<String>,
    pub expected_close_date: Option<String>,
    pub notes: Option<String>,
}
