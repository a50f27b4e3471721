//! Application composition root.
//!
//! # Responsibility
//! - Wire the three CRUD services over one latency profile.
//! - Own the initialize/reset lifecycle the view layer builds on.
//!
//! # Invariants
//! - Each `SalespadApp` value owns independent collections; two apps never
//!   share state.

use crate::insight::stats::{dashboard_snapshot, DashboardSnapshot};
use crate::latency::LatencyProfile;
use crate::seed;
use crate::service::{ActivityService, ContactService, DealService};

/// The wired data layer handed to the view layer.
#[derive(Clone)]
pub struct SalespadApp {
    pub contacts: ContactService,
    pub deals: DealService,
    pub activities: ActivityService,
}

impl SalespadApp {
    /// Creates an app with every collection empty.
    pub fn empty(latency: LatencyProfile) -> Self {
        Self {
            contacts: ContactService::new(latency),
            deals: DealService::new(latency),
            activities: ActivityService::new(latency),
        }
    }

    /// Creates an app seeded from the embedded startup datasets.
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self {
            contacts: ContactService::with_records(seed::contacts(), latency),
            deals: DealService::with_records(seed::deals(), latency),
            activities: ActivityService::with_records(seed::activities(), latency),
        }
    }

    /// Reads all three collections and computes the dashboard headline
    /// numbers. Pays one list delay per collection.
    pub async fn dashboard(&self) -> DashboardSnapshot {
        let contacts = self.contacts.get_all().await;
        let deals = self.deals.get_all().await;
        let activities = self.activities.get_all().await;
        dashboard_snapshot(&contacts, &deals, &activities)
    }
}
