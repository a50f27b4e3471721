//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record and its create/update draft.
//!
//! # Invariants
//! - All fields besides id and timestamps are free text; the store applies
//!   no coercion and enforces no required fields.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// A person record in the contact book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub notes: String,
    /// Creation time in epoch milliseconds, store-assigned.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds, store-assigned.
    pub updated_at: i64,
}

/// Caller-provided contact fields for create and update.
///
/// `None` means "not provided": left empty on create, preserved on update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub notes: Option<String>,
}
