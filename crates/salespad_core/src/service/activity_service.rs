//! Activity-log CRUD service.
//!
//! # Responsibility
//! - Provide the activity collection's call contract for view-layer
//!   callers.
//! - Coerce `duration` from raw draft text.
//!
//! # Invariants
//! - `get_all` lists most recent first (`activity_date` descending, id
//!   ascending tiebreak).
//! - `activity_date` is set once at create and survives every update.
//! - Updates do not stamp any timestamp; activities carry no `updated_at`.

use crate::clock;
use crate::coerce;
use crate::latency::{LatencyProfile, Operation};
use crate::model::activity::{Activity, ActivityDraft, DEFAULT_DURATION_MINUTES};
use crate::model::RecordId;
use crate::store::{RecordStore, StoreResult};
use log::{debug, warn};
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to the activity collection.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<Mutex<RecordStore<Activity>>>,
    latency: LatencyProfile,
}

impl ActivityService {
    /// Creates a service over an empty collection.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Creates a service over a pre-populated collection.
    pub fn with_records(records: Vec<Activity>, latency: LatencyProfile) -> Self {
        Self {
            store: Arc::new(Mutex::new(RecordStore::with_records(records))),
            latency,
        }
    }

    /// Returns copies of all activities, most recent first.
    pub async fn get_all(&self) -> Vec<Activity> {
        self.latency.simulate(Operation::List).await;
        let mut activities = self.store.lock().await.list();
        activities.sort_by_key(|activity| (Reverse(activity.activity_date), activity.id));
        activities
    }

    /// Returns a copy of one activity, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: RecordId) -> Option<Activity> {
        self.latency.simulate(Operation::Fetch).await;
        self.store.lock().await.find(id)
    }

    /// Stores a new activity from `draft` and returns a copy of it.
    ///
    /// `activity_date` is stamped with the current time regardless of the
    /// draft; unparseable or absent `duration` falls back to 30 minutes.
    /// Creation never fails.
    pub async fn create(&self, draft: ActivityDraft) -> Activity {
        self.latency.simulate(Operation::Create).await;
        let mut store = self.store.lock().await;
        let now = clock::now_ms();
        let activity = Activity {
            id: store.allocate_id(),
            kind: draft.kind.unwrap_or_default(),
            subject: draft.subject.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            contact_id: draft.contact_id,
            deal_id: draft.deal_id,
            duration_minutes: coerce::int_or(
                draft.duration_minutes.as_deref(),
                DEFAULT_DURATION_MINUTES,
            ),
            activity_date: now,
            created_at: now,
        };
        debug!(
            "event=activity_create module=service status=ok id={} kind={}",
            activity.id, activity.kind
        );
        store.insert(activity)
    }

    /// Merges `draft` over the activity with `id` and returns a copy of the
    /// result. `duration` re-coerces with the previous stored value as
    /// fallback; `activity_date` is untouched.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn update(&self, id: RecordId, draft: ActivityDraft) -> StoreResult<Activity> {
        self.latency.simulate(Operation::Update).await;
        let mut store = self.store.lock().await;
        let updated = store.update(id, |activity| {
            if let Some(kind) = draft.kind {
                activity.kind = kind;
            }
            if let Some(subject) = draft.subject {
                activity.subject = subject;
            }
            if let Some(description) = draft.description {
                activity.description = description;
            }
            if let Some(contact_id) = draft.contact_id {
                activity.contact_id = Some(contact_id);
            }
            if let Some(deal_id) = draft.deal_id {
                activity.deal_id = Some(deal_id);
            }
            activity.duration_minutes = coerce::int_or(
                draft.duration_minutes.as_deref(),
                activity.duration_minutes,
            );
        });
        if let Err(err) = &updated {
            warn!("event=activity_update module=service status=not_found id={id} error={err}");
        }
        updated
    }

    /// Removes the activity with `id` and returns a copy of it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn delete(&self, id: RecordId) -> StoreResult<Activity> {
        self.latency.simulate(Operation::Delete).await;
        let removed = self.store.lock().await.remove(id);
        match &removed {
            Ok(_) => debug!("event=activity_delete module=service status=ok id={id}"),
            Err(err) => {
                warn!("event=activity_delete module=service status=not_found id={id} error={err}")
            }
        }
        removed
    }
}
