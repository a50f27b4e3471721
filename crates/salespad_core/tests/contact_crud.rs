use salespad_core::{ContactDraft, ContactService, LatencyProfile, RecordKind, StoreError};
use std::time::Duration;

fn service() -> ContactService {
    ContactService::new(LatencyProfile::none())
}

fn name_draft(first: &str, last: &str) -> ContactDraft {
    ContactDraft {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        ..ContactDraft::default()
    }
}

#[tokio::test]
async fn create_then_get_returns_an_equal_record() {
    let contacts = service();

    let created = contacts.create(name_draft("Ada", "Lovelace")).await;
    assert!(created.id > 0);
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.email, "");

    let fetched = contacts.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_by_id_returns_none_for_unknown_id() {
    let contacts = service();
    assert!(contacts.get_by_id(12345).await.is_none());
}

#[tokio::test]
async fn get_all_hands_out_copies_not_aliases() {
    let contacts = service();
    contacts.create(name_draft("Ada", "Lovelace")).await;

    let mut snapshot = contacts.get_all().await;
    snapshot[0].first_name = "Mutated".to_string();
    snapshot.clear();

    let fresh = contacts.get_all().await;
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].first_name, "Ada");
}

#[tokio::test]
async fn update_merges_provided_fields_and_restamps_updated_at() {
    let contacts = service();
    let created = contacts.create(name_draft("Ada", "Lovelace")).await;

    // Let the wall clock tick so the updated_at change is observable.
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = contacts
        .update(
            created.id,
            ContactDraft {
                company: Some("Analytical Engines".to_string()),
                ..ContactDraft::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.company, "Analytical Engines");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_leaves_collection_unchanged() {
    let contacts = service();
    let created = contacts.create(name_draft("Ada", "Lovelace")).await;

    let err = contacts
        .update(9999, name_draft("Grace", "Hopper"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            kind: RecordKind::Contact,
            id: 9999
        }
    );

    let all = contacts.get_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found_and_leaves_collection_unchanged() {
    let contacts = service();
    contacts.create(name_draft("Ada", "Lovelace")).await;

    let err = contacts.delete(9999).await.unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            kind: RecordKind::Contact,
            id: 9999
        }
    );
    assert_eq!(contacts.get_all().await.len(), 1);
}

#[tokio::test]
async fn delete_existing_id_shrinks_collection_by_one_and_returns_the_record() {
    let contacts = service();
    let first = contacts.create(name_draft("Ada", "Lovelace")).await;
    let second = contacts.create(name_draft("Grace", "Hopper")).await;

    let removed = contacts.delete(first.id).await.unwrap();
    assert_eq!(removed, first);

    let all = contacts.get_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], second);
    assert!(contacts.get_by_id(first.id).await.is_none());
}

#[tokio::test]
async fn rapid_creates_assign_unique_increasing_ids() {
    let contacts = service();
    let mut previous = 0;
    for index in 0..10 {
        let created = contacts.create(name_draft("Batch", &index.to_string())).await;
        assert!(created.id > previous);
        previous = created.id;
    }
    assert_eq!(contacts.get_all().await.len(), 10);
}
