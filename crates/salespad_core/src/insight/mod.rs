//! Read-side helpers over store snapshots.
//!
//! # Responsibility
//! - Shape record lists for display: reference lookup, pipeline grouping,
//!   contact search/sort, dashboard totals.
//!
//! # Invariants
//! - Everything here is a pure function over copies the services handed
//!   out; nothing reaches back into a store.

pub mod lookup;
pub mod pipeline;
pub mod search;
pub mod stats;
