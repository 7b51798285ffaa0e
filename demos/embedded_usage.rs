//! Minimal embedding example for azdns-core
//!
//! Runs the full resource lifecycle against the in-memory DNS service:
//! create, read, update in place, import, delete. No network access and no
//! credentials required.

use std::sync::Arc;

use azdns_core::{
    InMemoryDnsService, PtrRecordAdapter, PtrRecordSpec, PtrRecordState, ReadOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let service = Arc::new(InMemoryDnsService::new("00000000-0000-0000-0000-000000000000"));
    let adapter = PtrRecordAdapter::new(service);

    let mut spec = PtrRecordSpec {
        name: "ptr1".to_string(),
        resource_group: "rg1".to_string(),
        zone_name: "0.168.192.in-addr.arpa".to_string(),
        ttl: 300,
        records: ["host1.example.com".to_string(), "host2.example.com".to_string()]
            .into_iter()
            .collect(),
        tags: [("env".to_string(), "demo".to_string())].into_iter().collect(),
    };

    // Create
    let mut state = PtrRecordState::new();
    adapter.create_or_update(&spec, &mut state).await?;
    tracing::info!(id = state.id().unwrap(), etag = ?state.etag, "created");

    // Update in place: ttl and target set change, identity does not
    spec.ttl = 600;
    spec.records.insert("host3.example.com".to_string());
    adapter.create_or_update(&spec, &mut state).await?;
    tracing::info!(ttl = state.ttl, records = state.records.len(), "updated");

    // Import the minted identifier into a fresh snapshot and read it back
    let raw_id = state.id().unwrap().to_string();
    let mut imported = PtrRecordAdapter::import(&raw_id)?;
    match adapter.read(&mut imported).await? {
        ReadOutcome::Present => {
            tracing::info!(records = ?imported.records, "imported snapshot refreshed")
        }
        ReadOutcome::Absent => anyhow::bail!("imported record set unexpectedly absent"),
    }

    // Delete, then observe absence through a read
    adapter.delete(&state).await?;
    assert_eq!(adapter.read(&mut state).await?, ReadOutcome::Absent);
    tracing::info!("deleted; read now reports absent");

    Ok(())
}
