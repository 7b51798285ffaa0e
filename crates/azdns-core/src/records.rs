//! Record set data model shared by the adapter and `DnsService` implementations
//!
//! These types mirror the shape of a DNS record set as the remote service
//! reports it: an opaque identifier, a concurrency etag, and a properties
//! bag holding TTL, metadata, and the record list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record type discriminator threaded through every service call
///
/// Only PTR is defined here; the discriminator exists so the service seam
/// matches the remote API, which scopes every operation by record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Pointer record (reverse DNS)
    Ptr,
}

impl RecordType {
    /// Path and wire representation of the discriminator
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Ptr => "PTR",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single PTR record entry (one target hostname)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtrRecord {
    /// Target hostname the pointer resolves to
    pub ptrdname: String,
}

/// Properties carried by an upsert and echoed back by a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSetProperties {
    /// Time-to-live in seconds
    pub ttl: i64,

    /// Key/value metadata (the resource's tags, passed through)
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// One entry per target hostname; order carries no meaning
    #[serde(default)]
    pub ptr_records: Vec<PtrRecord>,
}

/// A record set as reported by the service
///
/// Used for both the upsert response and the get response. `id` is the
/// server-assigned opaque identifier; an upsert response without one is a
/// contract violation the adapter reports as a protocol error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Server-assigned opaque identifier
    pub id: Option<String>,

    /// Concurrency token assigned by the service
    pub etag: Option<String>,

    /// TTL, metadata, and record list
    pub properties: RecordSetProperties,
}
