//! Soft-reference resolution for display.
//!
//! # Responsibility
//! - Resolve `contact_id` / `deal_id` references to display text with a
//!   stable placeholder for dangling or absent references.
//!
//! # Invariants
//! - References are resolved against the snapshot given, never validated at
//!   the store.

use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::model::RecordId;

const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_CONTACT: &str = "Unknown Contact";
const UNKNOWN_DEAL: &str = "Unknown Deal";

/// Formats one contact as "First Last", trimmed, or `"Unknown"` when both
/// name parts are blank.
pub fn display_name(contact: &Contact) -> String {
    let name = format!("{} {}", contact.first_name, contact.last_name)
        .trim()
        .to_string();
    if name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name
    }
}

/// Resolves a contact reference to a display name.
///
/// Absent and dangling references both resolve to `"Unknown Contact"`.
pub fn contact_display_name(contacts: &[Contact], id: Option<RecordId>) -> String {
    id.and_then(|id| contacts.iter().find(|contact| contact.id == id))
        .map(display_name)
        .unwrap_or_else(|| UNKNOWN_CONTACT.to_string())
}

/// Resolves a deal reference to its title.
///
/// Absent and dangling references both resolve to `"Unknown Deal"`.
pub fn deal_title(deals: &[Deal], id: Option<RecordId>) -> String {
    deals
        .iter()
        .find(|deal| Some(deal.id) == id)
        .map(|deal| deal.title.clone())
        .unwrap_or_else(|| UNKNOWN_DEAL.to_string())
}
