//! Contact CRUD service.
//!
//! # Responsibility
//! - Provide the contact collection's call contract for view-layer callers.
//!
//! # Invariants
//! - Contact fields pass through verbatim; no numeric coercion.
//! - `create` stamps `created_at` and `updated_at`; `update` re-stamps
//!   `updated_at` only.

use crate::clock;
use crate::latency::{LatencyProfile, Operation};
use crate::model::contact::{Contact, ContactDraft};
use crate::model::RecordId;
use crate::store::{RecordStore, StoreResult};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to the contact collection.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<Mutex<RecordStore<Contact>>>,
    latency: LatencyProfile,
}

impl ContactService {
    /// Creates a service over an empty collection.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Creates a service over a pre-populated collection.
    pub fn with_records(records: Vec<Contact>, latency: LatencyProfile) -> Self {
        Self {
            store: Arc::new(Mutex::new(RecordStore::with_records(records))),
            latency,
        }
    }

    /// Returns copies of all contacts in insertion order.
    pub async fn get_all(&self) -> Vec<Contact> {
        self.latency.simulate(Operation::List).await;
        self.store.lock().await.list()
    }

    /// Returns a copy of one contact, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: RecordId) -> Option<Contact> {
        self.latency.simulate(Operation::Fetch).await;
        self.store.lock().await.find(id)
    }

    /// Stores a new contact from `draft` and returns a copy of it.
    ///
    /// Fields the draft does not provide are stored empty; creation never
    /// fails.
    pub async fn create(&self, draft: ContactDraft) -> Contact {
        self.latency.simulate(Operation::Create).await;
        let mut store = self.store.lock().await;
        let now = clock::now_ms();
        let contact = Contact {
            id: store.allocate_id(),
            first_name: draft.first_name.unwrap_or_default(),
            last_name: draft.last_name.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            company: draft.company.unwrap_or_default(),
            position: draft.position.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        debug!(
            "event=contact_create module=service status=ok id={}",
            contact.id
        );
        store.insert(contact)
    }

    /// Merges `draft` over the contact with `id` and returns a copy of the
    /// result.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn update(&self, id: RecordId, draft: ContactDraft) -> StoreResult<Contact> {
        self.latency.simulate(Operation::Update).await;
        let mut store = self.store.lock().await;
        let updated = store.update(id, |contact| {
            if let Some(first_name) = draft.first_name {
                contact.first_name = first_name;
            }
            if let Some(last_name) = draft.last_name {
                contact.last_name = last_name;
            }
            if let Some(email) = draft.email {
                contact.email = email;
            }
            if let Some(phone) = draft.phone {
                contact.phone = phone;
            }
            if let Some(company) = draft.company {
                contact.company = company;
            }
            if let Some(position) = draft.position {
                contact.position = position;
            }
            if let Some(notes) = draft.notes {
                contact.notes = notes;
            }
            contact.updated_at = clock::now_ms();
        });
        if let Err(err) = &updated {
            warn!("event=contact_update module=service status=not_found id={id} error={err}");
        }
        updated
    }

    /// Removes the contact with `id` and returns a copy of it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is unknown; the collection is
    ///   left unchanged.
    pub async fn delete(&self, id: RecordId) -> StoreResult<Contact> {
        self.latency.simulate(Operation::Delete).await;
        let removed = self.store.lock().await.remove(id);
        match &removed {
            Ok(_) => debug!("event=contact_delete module=service status=ok id={id}"),
            Err(err) => {
                warn!("event=contact_delete module=service status=not_found id={id} error={err}")
            }
        }
        removed
    }
}
