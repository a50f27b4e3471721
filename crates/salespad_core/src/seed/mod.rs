//! Embedded seed datasets.
//!
//! # Responsibility
//! - Provide the static startup dataset for each record collection.
//!
//! # Invariants
//! - Dataset shape is the record shape itself; ids and timestamps are
//!   embedded values, not synthesized at load.
//! - Datasets are compile-time assets; a parse failure is a build defect,
//!   not a runtime condition.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::activity::Activity;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use serde::de::DeserializeOwned;

/// Returns the seed contact collection.
pub fn contacts() -> Vec<Contact> {
    decode("contacts", include_str!("contacts.json"))
}

/// Returns the seed deal collection.
pub fn deals() -> Vec<Deal> {
    decode("deals", include_str!("deals.json"))
}

/// Returns the seed activity collection.
pub fn activities() -> Vec<Activity> {
    decode("activities", include_str!("activities.json"))
}

fn decode<T: DeserializeOwned>(kind: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => panic!("embedded {kind} seed dataset is malformed: {err}"),
    }
}
