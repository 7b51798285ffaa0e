//! PTR record resource adapter
//!
//! The adapter sits between the engine's per-resource state snapshot and
//! the remote DNS service. Control flow is caller-driven: the engine
//! invokes one of four entry points per reconciliation pass, and the
//! adapter never initiates calls on its own.
//!
//! ## Entry points
//!
//! 1. [`PtrRecordAdapter::create_or_update`] — upsert, persist the minted
//!    identifier, then re-read to refresh the snapshot
//! 2. [`PtrRecordAdapter::read`] — non-mutating probe; "not found" is the
//!    `Absent` outcome, not an error
//! 3. [`PtrRecordAdapter::delete`] — unconditional delete
//! 4. [`PtrRecordAdapter::import`] — adopt an externally supplied
//!    identifier verbatim
//!
//! ## State machine (per logical resource)
//!
//! ```text
//! Absent ──create_or_update──▶ Present ──create_or_update──▶ Present
//!                                 │
//!                               delete
//!                                 ▼
//!                               Absent
//! ```
//!
//! Read is valid from either state; from `Absent` it reports `Absent`
//! rather than erroring.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::PtrRecordSpec;
use crate::error::{Error, Result};
use crate::records::{RecordSet, RecordSetProperties, RecordType};
use crate::resource_id::ResourceId;
use crate::state::PtrRecordState;
use crate::traits::DnsService;

/// Outcome of a read probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The record set exists; the snapshot was refreshed from the service
    Present,
    /// The record set does not exist; the snapshot was cleared
    Absent,
}

/// Adapter for one PTR record resource kind
///
/// Holds the service handle as an explicit dependency injected at
/// construction. Single-threaded per resource, synchronous request/response
/// per call: no retries, no internal locking, no caching beyond the
/// snapshot the engine owns.
pub struct PtrRecordAdapter {
    service: Arc<dyn DnsService>,
}

impl PtrRecordAdapter {
    /// Create an adapter backed by the given DNS service
    pub fn new(service: Arc<dyn DnsService>) -> Self {
        Self { service }
    }

    /// Upsert the record set described by `spec` and refresh `state`
    ///
    /// Issues exactly one upsert carrying the last-known etag (empty means
    /// "no concurrency check, allow overwrite") and an empty If-None-Match
    /// token, then re-reads the record set. The double round-trip is
    /// intentional: the upsert response is not trusted as a complete source
    /// of truth for computed fields.
    pub async fn create_or_update(
        &self,
        spec: &PtrRecordSpec,
        state: &mut PtrRecordState,
    ) -> Result<()> {
        spec.validate()?;
        let ptr_records = spec.expand_records()?;

        let properties = RecordSetProperties {
            ttl: i64::from(spec.ttl),
            metadata: spec.tags.clone(),
            ptr_records,
        };
        let etag = state.etag.clone().unwrap_or_default();

        info!(
            service = self.service.service_name(),
            record = %spec.name,
            zone = %spec.zone_name,
            resource_group = %spec.resource_group,
            "upserting PTR record set"
        );

        // Empty If-None-Match so a later apply can still update the record
        // set; "*" would make it immutable after first creation.
        let response = self
            .service
            .create_or_update(
                &spec.resource_group,
                &spec.zone_name,
                &spec.name,
                RecordType::Ptr,
                properties,
                &etag,
                "",
            )
            .await?;

        let id = response.id.ok_or_else(|| {
            Error::protocol(format!(
                "upsert of PTR record set {:?} in resource group {:?} returned no identifier",
                spec.name, spec.resource_group
            ))
        })?;
        state.set_id(id);

        match self.read(state).await? {
            ReadOutcome::Present => Ok(()),
            ReadOutcome::Absent => Err(Error::protocol(format!(
                "PTR record set {:?} vanished between upsert and read-back",
                spec.name
            ))),
        }
    }

    /// Probe the record set identified by the snapshot and refresh it
    ///
    /// On `Absent` the snapshot is cleared: the engine must treat this as
    /// "delete my local record of this resource", not as a failure. Any
    /// other non-success condition propagates and halts reconciliation for
    /// this resource.
    pub async fn read(&self, state: &mut PtrRecordState) -> Result<ReadOutcome> {
        let raw_id = state
            .id()
            .ok_or_else(|| Error::parse("state snapshot carries no resource identifier"))?
            .to_string();
        let id = ResourceId::parse(&raw_id)?;

        debug!(
            service = self.service.service_name(),
            record = %id.record_name,
            zone = %id.zone_name,
            "reading PTR record set"
        );

        let record_set = match self
            .service
            .get(&id.resource_group, &id.zone_name, &id.record_name, RecordType::Ptr)
            .await
        {
            Ok(record_set) => record_set,
            Err(err) if err.is_not_found() => {
                warn!(
                    record = %id.record_name,
                    zone = %id.zone_name,
                    "PTR record set no longer exists; clearing local state"
                );
                state.clear();
                return Ok(ReadOutcome::Absent);
            }
            Err(err) => return Err(err),
        };

        write_back(state, &id, record_set)?;
        Ok(ReadOutcome::Present)
    }

    /// Delete the record set identified by the snapshot
    ///
    /// Unconditional: an empty concurrency token is sent. Local state is
    /// left untouched here; the engine removes the resource from its store
    /// only after this call reports success.
    pub async fn delete(&self, state: &PtrRecordState) -> Result<()> {
        let raw_id = state
            .id()
            .ok_or_else(|| Error::parse("state snapshot carries no resource identifier"))?;
        let id = ResourceId::parse(raw_id)?;

        info!(
            service = self.service.service_name(),
            record = %id.record_name,
            zone = %id.zone_name,
            "deleting PTR record set"
        );

        self.service
            .delete(&id.resource_group, &id.zone_name, &id.record_name, RecordType::Ptr, "")
            .await
            .map_err(|err| {
                Error::remote(
                    id.record_name.clone(),
                    format!("delete of PTR record set failed: {err}"),
                )
            })
    }

    /// Adopt an externally supplied opaque identifier
    ///
    /// The identifier string passed in IS the resource's final identifier,
    /// unchanged; the returned snapshot awaits the next read to populate
    /// its remaining fields.
    pub fn import(raw_id: &str) -> Result<PtrRecordState> {
        let id = ResourceId::parse(raw_id)?;
        debug!(
            record = %id.record_name,
            zone = %id.zone_name,
            resource_group = %id.resource_group,
            "imported PTR record set identifier"
        );
        Ok(PtrRecordState::imported(raw_id))
    }
}

/// Flatten a service record set back into the snapshot
///
/// Writes every field; deduplication of hostnames is implicit because the
/// snapshot stores them as a set.
fn write_back(state: &mut PtrRecordState, id: &ResourceId, record_set: RecordSet) -> Result<()> {
    let ttl = u32::try_from(record_set.properties.ttl).map_err(|_| {
        Error::protocol(format!(
            "service reported TTL {} outside the unsigned 32-bit range",
            record_set.properties.ttl
        ))
    })?;

    state.name = id.record_name.clone();
    state.resource_group = id.resource_group.clone();
    state.zone_name = id.zone_name.clone();
    state.ttl = ttl;
    state.etag = record_set.etag;
    state.records = record_set
        .properties
        .ptr_records
        .into_iter()
        .map(|record| record.ptrdname)
        .collect();
    state.tags = record_set.properties.metadata;
    state.refreshed_at = Some(Utc::now());
    Ok(())
}
