//! Numeric coercion for raw form-style field input.
//!
//! # Responsibility
//! - Turn raw optional text into canonical numeric values with a defined
//!   fallback, as one named function per numeric shape.
//!
//! # Invariants
//! - Absent input and unparseable input both resolve to the fallback.
//! - Parsing requires the whole trimmed string to be numeric; no prefix
//!   salvage.
//!
//! # See also
//! - docs/architecture/data-model.md

/// Parses raw text as a float, returning `fallback` when the input is
/// absent or not a number.
pub fn float_or(raw: Option<&str>, fallback: f64) -> f64 {
    match raw {
        Some(text) => text.trim().parse::<f64>().unwrap_or(fallback),
        None => fallback,
    }
}

/// Parses raw text as an integer, returning `fallback` when the input is
/// absent or not an integer.
pub fn int_or(raw: Option<&str>, fallback: i64) -> i64 {
    match raw {
        Some(text) => text.trim().parse::<i64>().unwrap_or(fallback),
        None => fallback,
    }
}
