//! Real-environment validation tool for the ARM DNS service backend
//!
//! Runs the full PTR record lifecycle against a live Azure subscription and
//! cleans up after itself.
//!
//! ## Usage
//!
//! ```bash
//! AZDNS_SUBSCRIPTION_ID=your_subscription \
//! AZDNS_BEARER_TOKEN=$(az account get-access-token --query accessToken -o tsv) \
//! AZDNS_RESOURCE_GROUP=your_resource_group \
//! AZDNS_ZONE=0.168.192.in-addr.arpa \
//! cargo run --bin arm_validation
//! ```
//!
//! ## Environment Variables
//!
//! Required:
//! - `AZDNS_SUBSCRIPTION_ID`: Subscription containing the zone
//! - `AZDNS_BEARER_TOKEN`: Pre-acquired ARM bearer token
//! - `AZDNS_RESOURCE_GROUP`: Resource group containing the zone
//! - `AZDNS_ZONE`: An existing DNS zone to create the test record in
//!
//! Optional:
//! - `AZDNS_RECORD_NAME`: Record set name (default: "azdns-validation")

use std::env;
use std::sync::Arc;

use azdns_arm::ArmDnsService;
use azdns_core::{PtrRecordAdapter, PtrRecordSpec, PtrRecordState, ReadOutcome};

fn required_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        tracing::error!("{name} environment variable is required");
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let subscription_id = required_env("AZDNS_SUBSCRIPTION_ID");
    let bearer_token = required_env("AZDNS_BEARER_TOKEN");
    let resource_group = required_env("AZDNS_RESOURCE_GROUP");
    let zone_name = required_env("AZDNS_ZONE");
    let record_name =
        env::var("AZDNS_RECORD_NAME").unwrap_or_else(|_| "azdns-validation".to_string());

    tracing::warn!("this tool creates and deletes a real record set: {record_name}");

    let service = Arc::new(ArmDnsService::new(subscription_id, bearer_token)?);
    let adapter = PtrRecordAdapter::new(service);

    let mut spec = PtrRecordSpec {
        name: record_name.clone(),
        resource_group,
        zone_name,
        ttl: 300,
        records: ["validation.example.com".to_string()].into_iter().collect(),
        tags: [("purpose".to_string(), "azdns-validation".to_string())]
            .into_iter()
            .collect(),
    };

    // Step 1: create
    let mut state = PtrRecordState::new();
    adapter.create_or_update(&spec, &mut state).await?;
    tracing::info!(id = state.id().unwrap(), etag = ?state.etag, "record set created");

    // Step 2: update in place
    spec.ttl = 600;
    spec.records.insert("validation-2.example.com".to_string());
    adapter.create_or_update(&spec, &mut state).await?;
    tracing::info!(ttl = state.ttl, records = ?state.records, "record set updated");

    // Step 3: import the minted identifier and read it back
    let raw_id = state.id().unwrap().to_string();
    let mut imported = PtrRecordAdapter::import(&raw_id)?;
    match adapter.read(&mut imported).await? {
        ReadOutcome::Present => tracing::info!("import round-trip verified"),
        ReadOutcome::Absent => anyhow::bail!("imported record set reported absent"),
    }

    // Step 4: delete and verify absence
    adapter.delete(&state).await?;
    match adapter.read(&mut state).await? {
        ReadOutcome::Absent => tracing::info!("record set deleted; validation passed"),
        ReadOutcome::Present => anyhow::bail!("record set still present after delete"),
    }

    Ok(())
}
