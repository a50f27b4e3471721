//! In-memory record storage.
//!
//! # Responsibility
//! - Hold one ordered collection per record kind for the process lifetime.
//! - Return semantic `NotFound` errors for mutations against absent ids.
//!
//! # Invariants
//! - Reads hand out copies; callers can never alias store-internal state.
//! - State lives only as long as the owning store value; there is no
//!   persistence or eviction.

use crate::model::{RecordId, RecordKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod record_store;

pub use record_store::RecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error. The taxonomy is deliberately a single condition:
/// malformed numeric input is coerced, not rejected, and soft references
/// are never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists in the collection.
    NotFound { kind: RecordKind, id: RecordId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for StoreError {}
