//! CRUD services, one per record kind.
//!
//! # Responsibility
//! - Expose the async get_all/get_by_id/create/update/delete contract over
//!   each record store.
//! - Apply kind-specific numeric coercion on the write path.
//!
//! # Invariants
//! - Every operation awaits its latency slot before the collection is
//!   touched.
//! - The store mutex is held only for the collection step, never across the
//!   latency await.

pub mod activity_service;
pub mod contact_service;
pub mod deal_service;

pub use activity_service::ActivityService;
pub use contact_service::ContactService;
pub use deal_service::DealService;
