//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `salespad_core` wiring without
//!   a UI shell.
//! - Keep output deterministic for quick local sanity checks.

use salespad_core::{LatencyProfile, SalespadApp};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = SalespadApp::seeded(LatencyProfile::none());
    let snapshot = app.dashboard().await;

    println!("salespad_core version={}", salespad_core::core_version());
    println!(
        "contacts={} deals={} pipeline_value={} activities={}",
        snapshot.contact_count,
        snapshot.deal_count,
        snapshot.pipeline_value,
        snapshot.activity_count
    );
}
