//! Simulated network latency for store operations.
//!
//! # Responsibility
//! - Hold the per-operation delay table used by every CRUD service.
//! - Suspend cooperatively before a collection is touched.
//!
//! # Invariants
//! - Delays are fixed per operation; there is no jitter, cancellation or
//!   timeout path.
//! - A zero duration never yields to the timer.
//!
//! # See also
//! - docs/architecture/latency.md

use std::time::Duration;
use tokio::time::sleep;

const SIMULATED_LIST_MS: u64 = 300;
const SIMULATED_FETCH_MS: u64 = 200;
const SIMULATED_CREATE_MS: u64 = 400;
const SIMULATED_UPDATE_MS: u64 = 350;
const SIMULATED_DELETE_MS: u64 = 250;

/// Store operation kinds, used to select a delay slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full-collection read (`get_all`).
    List,
    /// Single-record read (`get_by_id`).
    Fetch,
    Create,
    Update,
    Delete,
}

/// Fixed per-operation delay table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub fetch: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    /// Delay table matching the emulated network backend.
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(SIMULATED_LIST_MS),
            fetch: Duration::from_millis(SIMULATED_FETCH_MS),
            create: Duration::from_millis(SIMULATED_CREATE_MS),
            update: Duration::from_millis(SIMULATED_UPDATE_MS),
            delete: Duration::from_millis(SIMULATED_DELETE_MS),
        }
    }

    /// Disables all delays. Intended for tests and embedding hosts that
    /// want synchronous-feeling calls.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Applies the same delay to every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            fetch: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }

    /// Returns the configured delay for one operation kind.
    pub fn duration_for(&self, op: Operation) -> Duration {
        match op {
            Operation::List => self.list,
            Operation::Fetch => self.fetch,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }

    /// Suspends the caller for the operation's delay slot.
    pub async fn simulate(&self, op: Operation) {
        let delay = self.duration_for(op);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}
