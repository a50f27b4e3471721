use salespad_core::{seed, ContactDraft, LatencyProfile, SalespadApp};
use std::collections::HashSet;

#[tokio::test]
async fn seeded_app_exposes_the_embedded_datasets() {
    let app = SalespadApp::seeded(LatencyProfile::none());

    assert_eq!(app.contacts.get_all().await.len(), seed::contacts().len());
    assert_eq!(app.deals.get_all().await.len(), seed::deals().len());
    assert_eq!(app.activities.get_all().await.len(), seed::activities().len());
}

#[tokio::test]
async fn seeded_activities_list_most_recent_first() {
    let app = SalespadApp::seeded(LatencyProfile::none());
    let listed = app.activities.get_all().await;

    for pair in listed.windows(2) {
        assert!(pair[0].activity_date >= pair[1].activity_date);
    }
}

#[tokio::test]
async fn created_ids_never_collide_with_seed_ids() {
    let app = SalespadApp::seeded(LatencyProfile::none());
    let created = app
        .contacts
        .create(ContactDraft {
            first_name: Some("New".to_string()),
            last_name: Some("Lead".to_string()),
            ..ContactDraft::default()
        })
        .await;

    let ids: HashSet<_> = app.contacts.get_all().await.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), seed::contacts().len() + 1);
    assert!(ids.contains(&created.id));
}

#[tokio::test]
async fn dashboard_snapshot_sums_the_whole_pipeline() {
    let app = SalespadApp::seeded(LatencyProfile::none());
    let snapshot = app.dashboard().await;

    assert_eq!(snapshot.contact_count, seed::contacts().len());
    assert_eq!(snapshot.deal_count, seed::deals().len());
    assert_eq!(snapshot.activity_count, seed::activities().len());

    let expected: f64 = seed::deals().iter().map(|deal| deal.value).sum();
    assert_eq!(snapshot.pipeline_value, expected);
}

#[tokio::test]
async fn two_apps_do_not_share_state() {
    let first = SalespadApp::seeded(LatencyProfile::none());
    let second = SalespadApp::seeded(LatencyProfile::none());

    let victim = first.contacts.get_all().await[0].id;
    first.contacts.delete(victim).await.unwrap();

    assert_eq!(
        second.contacts.get_all().await.len(),
        seed::contacts().len()
    );
}
