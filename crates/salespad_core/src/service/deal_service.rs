//! Deal CRUD service.
//!
//! # Responsibility
//! - Provide the deal collection's call contract for view-layer callers.
//! - Coerce `value` and `probability` from raw draft text.
//!
//! # Invariants
//! - Coercion fallback is 0 / 50 on create and the previous stored value on
//!   update.
//! - `stage` and `contact_id` are stored verbatim, unvalidated.

use crate::clock;
use crate::coerce;
use crate::latency::{LatencyProfile, Operation};
use crate::model::deal::{Deal, DealDraft, DEFAULT_PROBABILITY};
use crate::model::RecordId;
use crate::store::{RecordStore, StoreResult};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to the deal collection.
#[derive(Clone)]
pub struct DealService {
    store: Arc<Mutex<RecordStore<Deal>>>,
    latency: LatencyProfile,
}

impl DealService {
    /// Creates a service over an empty collection.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Creates a service over a pre-populated collection.
    pub fn with_records(records: Vec<Deal>, latency: LatencyProfile) -> Self {
        Self {
            store: Arc::new(Mutex::new(RecordStore::with_records(records))),
            latency,
        }
    }

    /// Returns copies of all deals in insertion order.
    pub async fn get_all(&self) -> Vec<Deal> {
        self.latency.simulate(Operation::List).await;
        self.store.lock().await.list()
    }

    /// Returns a copy of one deal, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: RecordId) -> Option<Deal> {
        self.latency.simulate(Operation::Fetch).await;
        self.store.lock().await.find(id)
    }

    /// Stores a new deal from `draft` and returns a copy of it.
    ///
    /// Unparseable or absent `value` falls back to 0, `probability` to 50;
    /// creation never fails.
    pub async fn create(&self, draft: DealDraft) -> Deal {
        self.latency.simulate(Operation::Create).await;
        let mut store = self.store.lock().await;
        let now = clock::now_ms();
        let deal = Deal {
            id: store.allocate_id(),
            title: draft.title.unwrap_or_default(),
            value: coerce::float_or(draft.value.as_deref(), 0.0),
            stage: draft.stage.unwrap_or_default(),
            contact_id: draft.contact_id,
            probability: coerce::int_or(draft.probability.as_deref(), DEFAULT_PROBABILITY),
            expected_close_date: draft.expected_close_date.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        debug!(
            "event=deal_create module=service status=ok id={} stage={}",
            deal.id, deal.stage
        );
        store.insert(deal)
    }

    /// Merges `draft` over the deal with `id` and returns a copy of the
    /// result. Numeric fields re-coerce with the previous stored value as
    /// fallback.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn update(&self, id: RecordId, draft: DealDraft) -> StoreResult<Deal> {
        self.latency.simulate(Operation::Update).await;
        let mut store = self.store.lock().await;
        let updated = store.update(id, |deal| {
            if let Some(title) = draft.title {
                deal.title = title;
            }
            deal.value = coerce::float_or(draft.value.as_deref(), deal.value);
            if let Some(stage) = draft.stage {
                deal.stage = stage;
            }
            if let Some(contact_id) = draft.contact_id {
                deal.contact_id = Some(contact_id);
            }
            deal.probability = coerce::int_or(draft.probability.as_deref(), deal.probability);
            if let Some(expected_close_date) = draft.expected_close_date {
                deal.expected_close_date = expected_close_date;
            }
            if let Some(notes) = draft.notes {
                deal.notes = notes;
            }
            deal.updated_at = clock::now_ms();
        });
        if let Err(err) = &updated {
            warn!("event=deal_update module=service status=not_found id={id} error={err}");
        }
        updated
    }

    /// Removes the deal with `id` and returns a copy of it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn delete(&self, id: RecordId) -> StoreResult<Deal> {
        self.latency.simulate(Operation::Delete).await;
        let removed = self.store.lock().await.remove(id);
        match &removed {
            Ok(_) => debug!("event=deal_delete module=service status=ok id={id}"),
            Err(err) => {
                warn!("event=deal_delete module=service status=not_found id={id} error={err}")
            }
        }
        removed
    }
}
