//! Last-known remote state snapshot for a PTR record resource
//!
//! The engine owns one snapshot per resource and treats it as a cache of
//! the last successful read; it is authoritative only between
//! reconciliation passes. A snapshot with no identifier means the resource
//! is absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Snapshot of a PTR record set as last observed at the service
///
/// Every field except `id` is overwritten wholesale by a successful read;
/// the read path is the single source of truth for post-call local state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtrRecordState {
    /// Opaque server-assigned identifier; `None` means absent
    id: Option<String>,

    /// Record set name
    pub name: String,

    /// Resource group containing the zone
    pub resource_group: String,

    /// DNS zone containing the record set
    pub zone_name: String,

    /// Time-to-live in seconds, as echoed by the service
    pub ttl: u32,

    /// Concurrency token from the last read; a soft hint only
    pub etag: Option<String>,

    /// Target hostnames, flattened back into a set
    pub records: BTreeSet<String>,

    /// Tags, flattened back from service metadata
    pub tags: BTreeMap<String, String>,

    /// When this snapshot was last refreshed from the service
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl PtrRecordState {
    /// Create an empty (absent) snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an imported identifier verbatim
    ///
    /// Pass-through convention: the string handed to import IS the
    /// resource's final identifier. All other fields stay empty until the
    /// next read populates them.
    pub(crate) fn imported(raw_id: impl Into<String>) -> Self {
        Self {
            id: Some(raw_id.into()),
            ..Self::default()
        }
    }

    /// The opaque identifier, if the resource is present
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Persist a server-assigned identifier as the resource's identity
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Whether the snapshot records the resource as absent
    pub fn is_absent(&self) -> bool {
        self.id.is_none()
    }

    /// Wipe the snapshot back to absent
    ///
    /// Called when a read observes that the remote resource no longer
    /// exists.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_absent() {
        let state = PtrRecordState::new();
        assert!(state.is_absent());
        assert_eq!(state.id(), None);
    }

    #[test]
    fn imported_snapshot_keeps_raw_identifier() {
        let state = PtrRecordState::imported("/some/opaque/id");
        assert_eq!(state.id(), Some("/some/opaque/id"));
        assert!(state.name.is_empty());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut state = PtrRecordState::imported("/some/opaque/id");
        state.name = "ptr1".to_string();
        state.ttl = 300;
        state.etag = Some("abc".to_string());
        state.clear();
        assert_eq!(state, PtrRecordState::default());
    }
}
