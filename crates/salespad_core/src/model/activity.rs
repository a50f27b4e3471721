//! Activity-log domain model.
//!
//! # Responsibility
//! - Define the logged-interaction record and its create/update draft.
//!
//! # Invariants
//! - `activity_date` is assigned once at creation and never user-settable.
//! - `kind` is stored verbatim; the store does not validate it against
//!   `KINDS`.
//! - Activities carry no `updated_at`; later edits leave timestamps alone.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Conventional activity kinds used by timeline rendering.
pub const KINDS: [&str; 4] = ["call", "meeting", "email", "note"];

/// Default duration in minutes assigned when a draft carries none.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

/// One logged customer interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    /// Interaction kind, conventionally one of `KINDS`.
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub description: String,
    /// Soft reference to a contact; never validated for existence.
    pub contact_id: Option<RecordId>,
    /// Optional soft reference to a deal; never validated for existence.
    pub deal_id: Option<RecordId>,
    /// Duration in minutes. Coerced, defaults to 30.
    #[serde(rename = "duration")]
    pub duration_minutes: i64,
    /// When the interaction happened, epoch milliseconds. Store-assigned at
    /// creation.
    pub activity_date: i64,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
}

/// Caller-provided activity fields for create and update.
///
/// `duration` arrives as raw text and goes through parse-with-fallback
/// coercion; `None` anywhere means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDraft {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub contact_id: Option<RecordId>,
    pub deal_id: Option<RecordId>,
    #[serde(rename = "duration")]
    pub duration_minutes: Option<String>,
}
