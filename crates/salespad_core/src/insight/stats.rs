//! Dashboard headline numbers.

use crate::insight::pipeline::pipeline_total;
use crate::model::activity::Activity;
use crate::model::contact::Contact;
use crate::model::deal::Deal;

/// The four stat-card values on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub contact_count: usize,
    pub deal_count: usize,
    /// Total value across all deals, every stage included.
    pub pipeline_value: f64,
    pub activity_count: usize,
}

/// Computes the dashboard snapshot from collection snapshots.
pub fn dashboard_snapshot(
    contacts: &[Contact],
    deals: &[Deal],
    activities: &[Activity],
) -> DashboardSnapshot {
    DashboardSnapshot {
        contact_count: contacts.len(),
        deal_count: deals.len(),
        pipeline_value: pipeline_total(deals),
        activity_count: activities.len(),
    }
}
