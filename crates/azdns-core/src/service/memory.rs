// # In-Memory DNS Service
//
// In-memory implementation of `DnsService`.
//
// ## Purpose
//
// Backs contract tests, demo binaries, and embedded usage without a remote
// endpoint. Behaves like the real service where the adapter can observe it:
// identifiers are minted in the ARM shape, every write rotates the etag,
// and the If-Match/If-None-Match tokens are enforced.
//
// ## When to use
//
// - Testing environments
// - Embedding the adapter without network access

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::records::{RecordSet, RecordSetProperties, RecordType};
use crate::resource_id::ResourceId;
use crate::traits::DnsService;

/// Key identifying one record set in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RecordKey {
    resource_group: String,
    zone_name: String,
    record_type: &'static str,
    record_name: String,
}

impl RecordKey {
    fn new(resource_group: &str, zone_name: &str, record_name: &str, record_type: RecordType) -> Self {
        Self {
            resource_group: resource_group.to_string(),
            zone_name: zone_name.to_string(),
            record_type: record_type.as_str(),
            record_name: record_name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredRecordSet {
    id: String,
    etag: String,
    properties: RecordSetProperties,
}

/// In-memory DNS service implementation
///
/// Record sets live in a HashMap behind a RwLock; nothing persists across
/// restarts. Etags are minted from a monotonic counter so every successful
/// upsert is observable as a new token.
#[derive(Debug, Clone)]
pub struct InMemoryDnsService {
    subscription_id: String,
    sets: Arc<RwLock<HashMap<RecordKey, StoredRecordSet>>>,
    etag_seq: Arc<AtomicU64>,
}

impl InMemoryDnsService {
    /// Create an empty service minting identifiers under the given subscription
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            sets: Arc::new(RwLock::new(HashMap::new())),
            etag_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of record sets currently stored
    pub async fn len(&self) -> usize {
        self.sets.read().await.len()
    }

    /// Whether the service holds no record sets
    pub async fn is_empty(&self) -> bool {
        self.sets.read().await.is_empty()
    }

    fn mint_etag(&self) -> String {
        let seq = self.etag_seq.fetch_add(1, Ordering::SeqCst);
        format!("W/\"{seq:016x}\"")
    }

    fn mint_id(&self, resource_group: &str, zone_name: &str, record_name: &str) -> String {
        ResourceId {
            resource_group: resource_group.to_string(),
            zone_name: zone_name.to_string(),
            record_name: record_name.to_string(),
        }
        .format(&self.subscription_id)
    }
}

#[async_trait]
impl DnsService for InMemoryDnsService {
    async fn create_or_update(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        properties: RecordSetProperties,
        etag: &str,
        if_none_match: &str,
    ) -> Result<RecordSet> {
        let key = RecordKey::new(resource_group, zone_name, record_name, record_type);
        let mut sets = self.sets.write().await;

        if let Some(existing) = sets.get(&key) {
            // "*" prevents updates after creation; other values are ignored,
            // matching the remote API's If-None-Match convention.
            if if_none_match == "*" {
                return Err(Error::remote(
                    record_name,
                    "precondition failed: record set already exists (If-None-Match: *)",
                ));
            }
            if !etag.is_empty() && etag != existing.etag {
                return Err(Error::remote(
                    record_name,
                    format!(
                        "precondition failed: etag {etag:?} does not match current {:?}",
                        existing.etag
                    ),
                ));
            }
        }

        let id = sets
            .get(&key)
            .map(|existing| existing.id.clone())
            .unwrap_or_else(|| self.mint_id(resource_group, zone_name, record_name));
        let new_etag = self.mint_etag();
        let stored = StoredRecordSet {
            id: id.clone(),
            etag: new_etag.clone(),
            properties: properties.clone(),
        };
        sets.insert(key, stored);

        Ok(RecordSet {
            id: Some(id),
            etag: Some(new_etag),
            properties,
        })
    }

    async fn get(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<RecordSet> {
        let key = RecordKey::new(resource_group, zone_name, record_name, record_type);
        let sets = self.sets.read().await;
        match sets.get(&key) {
            Some(stored) => Ok(RecordSet {
                id: Some(stored.id.clone()),
                etag: Some(stored.etag.clone()),
                properties: stored.properties.clone(),
            }),
            None => Err(Error::not_found(format!(
                "{record_type} record set {record_name:?} in zone {zone_name:?}"
            ))),
        }
    }

    async fn delete(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        _etag: &str,
    ) -> Result<()> {
        let key = RecordKey::new(resource_group, zone_name, record_name, record_type);
        let mut sets = self.sets.write().await;
        // Deleting a missing record set completes OK, mirroring the remote
        // API's 204 on a no-op delete.
        sets.remove(&key);
        Ok(())
    }

    fn service_name(&self) -> &'static str {
        "memory"
    }
}
