//! Wall-clock time source for stores and services.
//!
//! # Responsibility
//! - Provide the single epoch-millisecond read used for identifiers and
//!   record timestamps.
//!
//! # Invariants
//! - All timestamps in the crate are Unix epoch milliseconds (`i64`).

use chrono::Utc;

/// Returns the current wall-clock time in Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
