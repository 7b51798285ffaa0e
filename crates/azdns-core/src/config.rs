//! Typed desired-state configuration for the PTR record resource
//!
//! One strongly typed struct per resource kind, constructed once per
//! reconciliation pass. This replaces the dynamic attribute-bag pattern:
//! required fields are plain struct fields and validation happens up front
//! instead of through runtime type assertions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::records::PtrRecord;

/// Desired state of a single PTR record set
///
/// `name`, `resource_group`, and `zone_name` identify the resource and are
/// immutable after creation; `ttl`, `records`, and `tags` may change between
/// reconciliation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtrRecordSpec {
    /// Record set name within the zone
    pub name: String,

    /// Resource group containing the zone
    pub resource_group: String,

    /// DNS zone containing the record set
    pub zone_name: String,

    /// Time-to-live in seconds
    pub ttl: u32,

    /// Target hostnames; semantically unordered and deduplicated
    pub records: BTreeSet<String>,

    /// Key/value tags, passed through as service metadata
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl PtrRecordSpec {
    /// Defensive pre-dispatch check for required fields
    ///
    /// Engine-level schema validation is assumed to have already enforced
    /// required/force-new constraints; this catches a malformed spec before
    /// any remote call is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("record set name is required"));
        }
        if self.resource_group.trim().is_empty() {
            return Err(Error::validation("resource group is required"));
        }
        if self.zone_name.trim().is_empty() {
            return Err(Error::validation("zone name is required"));
        }
        if self.ttl == 0 {
            return Err(Error::validation("ttl is required and must be non-zero"));
        }
        if self.records.is_empty() {
            return Err(Error::validation("at least one target hostname is required"));
        }
        Ok(())
    }

    /// Expand the hostname set into the service's record-list shape
    ///
    /// One entry per hostname, no ordering guarantee. An empty hostname in
    /// the set is surfaced as a validation error rather than silently
    /// dropped.
    pub(crate) fn expand_records(&self) -> Result<Vec<PtrRecord>> {
        self.records
            .iter()
            .map(|hostname| {
                if hostname.trim().is_empty() {
                    Err(Error::validation("target hostname cannot be empty"))
                } else {
                    Ok(PtrRecord {
                        ptrdname: hostname.clone(),
                    })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_spec() -> PtrRecordSpec {
        PtrRecordSpec {
            name: "ptr1".to_string(),
            resource_group: "rg1".to_string(),
            zone_name: "zone1".to_string(),
            ttl: 300,
            records: ["host1.example.com".to_string(), "host2.example.com".to_string()]
                .into_iter()
                .collect(),
            tags: [("env".to_string(), "prod".to_string())].into_iter().collect(),
        }
    }

    #[test]
    fn valid_spec_passes() {
        assert!(valid_spec().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let mut spec = valid_spec();
        spec.name = String::new();
        assert!(matches!(spec.validate(), Err(Error::Validation(_))));

        let mut spec = valid_spec();
        spec.resource_group = "  ".to_string();
        assert!(matches!(spec.validate(), Err(Error::Validation(_))));

        let mut spec = valid_spec();
        spec.zone_name = String::new();
        assert!(matches!(spec.validate(), Err(Error::Validation(_))));

        let mut spec = valid_spec();
        spec.ttl = 0;
        assert!(matches!(spec.validate(), Err(Error::Validation(_))));

        let mut spec = valid_spec();
        spec.records.clear();
        assert!(matches!(spec.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn expand_produces_one_entry_per_hostname() {
        let records = valid_spec().expand_records().unwrap();
        let mut names: Vec<String> = records.into_iter().map(|r| r.ptrdname).collect();
        names.sort();
        assert_eq!(names, vec!["host1.example.com", "host2.example.com"]);
    }

    #[test]
    fn expand_surfaces_empty_hostname() {
        let mut spec = valid_spec();
        spec.records.insert("  ".to_string());
        assert!(matches!(spec.expand_records(), Err(Error::Validation(_))));
    }
}
