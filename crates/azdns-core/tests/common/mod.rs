//! Test doubles and common utilities for adapter contract tests

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use azdns_core::error::Result;
use azdns_core::records::{RecordSet, RecordSetProperties, RecordType};
use azdns_core::traits::DnsService;
use azdns_core::{InMemoryDnsService, PtrRecordAdapter, PtrRecordSpec};

/// Subscription id used by every test harness
pub const TEST_SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000000";

/// A `DnsService` wrapper that counts calls and records forwarded etags
pub struct RecordingDnsService {
    inner: Arc<dyn DnsService>,
    upsert_calls: AtomicUsize,
    get_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    /// Etag arguments seen by upsert, in call order
    upsert_etags: Mutex<Vec<String>>,
    /// If-None-Match arguments seen by upsert, in call order
    upsert_match_tokens: Mutex<Vec<String>>,
}

impl RecordingDnsService {
    pub fn new(inner: Arc<dyn DnsService>) -> Self {
        Self {
            inner,
            upsert_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            upsert_etags: Mutex::new(Vec::new()),
            upsert_match_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn upsert_etags(&self) -> Vec<String> {
        self.upsert_etags.lock().unwrap().clone()
    }

    pub fn upsert_match_tokens(&self) -> Vec<String> {
        self.upsert_match_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsService for RecordingDnsService {
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
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        self.upsert_etags.lock().unwrap().push(etag.to_string());
        self.upsert_match_tokens
            .lock()
            .unwrap()
            .push(if_none_match.to_string());
        self.inner
            .create_or_update(
                resource_group,
                zone_name,
                record_name,
                record_type,
                properties,
                etag,
                if_none_match,
            )
            .await
    }

    async fn get(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<RecordSet> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .get(resource_group, zone_name, record_name, record_type)
            .await
    }

    async fn delete(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        etag: &str,
    ) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .delete(resource_group, zone_name, record_name, record_type, etag)
            .await
    }

    fn service_name(&self) -> &'static str {
        "recording"
    }
}

/// Harness: adapter over a recording wrapper over the in-memory service
pub struct Harness {
    pub adapter: PtrRecordAdapter,
    pub recorder: Arc<RecordingDnsService>,
    pub memory: Arc<InMemoryDnsService>,
}

pub fn harness() -> Harness {
    let memory = Arc::new(InMemoryDnsService::new(TEST_SUBSCRIPTION));
    let recorder = Arc::new(RecordingDnsService::new(memory.clone()));
    let adapter = PtrRecordAdapter::new(recorder.clone());
    Harness {
        adapter,
        recorder,
        memory,
    }
}

/// The worked example from the adapter contract: two hostnames, ttl 300
pub fn sample_spec() -> PtrRecordSpec {
    PtrRecordSpec {
        name: "ptr1".to_string(),
        resource_group: "rg1".to_string(),
        zone_name: "zone1".to_string(),
        ttl: 300,
        records: sample_hostnames(),
        tags: [("env".to_string(), "prod".to_string())].into_iter().collect(),
    }
}

pub fn sample_hostnames() -> BTreeSet<String> {
    ["host1.example.com".to_string(), "host2.example.com".to_string()]
        .into_iter()
        .collect()
}

pub fn sample_tags() -> BTreeMap<String, String> {
    [("env".to_string(), "prod".to_string())].into_iter().collect()
}
