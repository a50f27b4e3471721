//! Domain records for the CRM data layer.
//!
//! # Responsibility
//! - Define the canonical record shapes held by the in-memory stores.
//! - Define the draft shapes accepted by create/update operations.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its
//!   collection.
//! - Cross-kind references (`contact_id`, `deal_id`) are soft: held as bare
//!   ids with no existence guarantee.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::fmt::{Display, Formatter};

pub mod activity;
pub mod contact;
pub mod deal;

/// Stable identifier for every stored record.
///
/// Values are Unix epoch milliseconds observed at creation time, kept as a
/// type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// The three record collections managed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Contact,
    Deal,
    Activity,
}

impl RecordKind {
    /// Lowercase label used in log events and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Deal => "deal",
            Self::Activity => "activity",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity contract every stored record satisfies.
pub trait Record: Clone {
    /// Collection this record type belongs to.
    const KIND: RecordKind;

    /// Stable identifier within the collection.
    fn id(&self) -> RecordId;
}

impl Record for contact::Contact {
    const KIND: RecordKind = RecordKind::Contact;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for deal::Deal {
    const KIND: RecordKind = RecordKind::Deal;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for activity::Activity {
    const KIND: RecordKind = RecordKind::Activity;

    fn id(&self) -> RecordId {
        self.id
    }
}
