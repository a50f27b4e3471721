//! Contact list filtering and sorting.
//!
//! # Responsibility
//! - Apply the contact table's search box and sortable-column semantics to
//!   a snapshot.
//!
//! # Invariants
//! - Matching is case-insensitive substring over first name, last name,
//!   email and company.
//! - An empty term matches every contact.
//! - Sorting compares lowercased field values for a locale-independent,
//!   deterministic order.

use crate::model::contact::Contact;

/// Sortable contact table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSortField {
    FirstName,
    LastName,
    Email,
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Search and sort options for the contact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    /// Substring typed into the search box.
    pub term: String,
    pub sort_field: ContactSortField,
    pub direction: SortDirection,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            sort_field: ContactSortField::FirstName,
            direction: SortDirection::Ascending,
        }
    }
}

impl ContactQuery {
    /// Creates a query with the default first-name ascending sort.
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }
}

/// Filters and sorts a contact snapshot for table display.
pub fn filter_contacts(contacts: &[Contact], query: &ContactQuery) -> Vec<Contact> {
    let term = query.term.to_lowercase();
    let mut matched: Vec<Contact> = contacts
        .iter()
        .filter(|contact| {
            contact.first_name.to_lowercase().contains(&term)
                || contact.last_name.to_lowercase().contains(&term)
                || contact.email.to_lowercase().contains(&term)
                || contact.company.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let left = sort_key(a, query.sort_field);
        let right = sort_key(b, query.sort_field);
        match query.direction {
            SortDirection::Ascending => left.cmp(&right),
            SortDirection::Descending => right.cmp(&left),
        }
    });
    matched
}

fn sort_key(contact: &Contact, field: ContactSortField) -> String {
    let value = match field {
        ContactSortField::FirstName => &contact.first_name,
        ContactSortField::LastName => &contact.last_name,
        ContactSortField::Email => &contact.email,
        ContactSortField::Company => &contact.company,
    };
    value.to_lowercase()
}
