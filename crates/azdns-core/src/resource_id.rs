//! Opaque ARM resource identifier parsing
//!
//! Azure Resource Manager identifiers are a path of key/value segment pairs:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Network/dnszones/{zone}/PTR/{name}
//! ```
//!
//! The adapter treats the identifier as opaque everywhere except here.
//! Invariant: any identifier previously minted by an upsert must re-parse
//! losslessly into its component triple.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::records::RecordType;

/// Path key for the resource group segment
const SEGMENT_RESOURCE_GROUPS: &str = "resourceGroups";

/// Path key for the DNS zone segment
const SEGMENT_DNS_ZONES: &str = "dnszones";

/// Composite key parsed from an opaque ARM identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    /// Resource group containing the zone
    pub resource_group: String,
    /// DNS zone containing the record set
    pub zone_name: String,
    /// Record set name
    pub record_name: String,
}

impl ResourceId {
    /// Parse an opaque ARM identifier into its component triple
    ///
    /// Fails with a parse error when the identifier has no recognizable
    /// resource-group segment or lacks the `dnszones`/`PTR` path components.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(Error::parse("identifier is empty"));
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        let mut components: HashMap<&str, &str> = HashMap::new();
        for pair in segments.chunks(2) {
            match pair {
                [key, value] => {
                    if key.is_empty() || value.is_empty() {
                        return Err(Error::parse(format!(
                            "identifier {raw:?} contains an empty path segment"
                        )));
                    }
                    components.insert(*key, *value);
                }
                [dangling] => {
                    return Err(Error::parse(format!(
                        "identifier {raw:?} has a dangling path segment {dangling:?}"
                    )));
                }
                _ => unreachable!("chunks(2) yields one- or two-element slices"),
            }
        }

        let lookup = |key: &str| -> Result<String> {
            components
                .get(key)
                .map(|value| (*value).to_string())
                .ok_or_else(|| Error::parse(format!("identifier {raw:?} has no {key:?} segment")))
        };

        Ok(Self {
            resource_group: lookup(SEGMENT_RESOURCE_GROUPS)?,
            zone_name: lookup(SEGMENT_DNS_ZONES)?,
            record_name: lookup(RecordType::Ptr.as_str())?,
        })
    }

    /// Render the identifier in the shape ARM mints it
    ///
    /// Used by the in-memory service and by tests; the output always
    /// satisfies the round-trip invariant of [`ResourceId::parse`].
    pub fn format(&self, subscription_id: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/dnszones/{}/{}/{}",
            subscription_id,
            self.resource_group,
            self.zone_name,
            RecordType::Ptr.as_str(),
            self.record_name,
        )
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.resource_group, self.zone_name, self.record_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_arm_identifier() {
        let raw = "/subscriptions/00000000-0000-0000-0000-000000000000\
                   /resourceGroups/rg1/providers/Microsoft.Network/dnszones/zone1/PTR/ptr1";
        let id = ResourceId::parse(raw).unwrap();
        assert_eq!(id.resource_group, "rg1");
        assert_eq!(id.zone_name, "zone1");
        assert_eq!(id.record_name, "ptr1");
    }

    #[test]
    fn format_then_parse_round_trips() {
        let id = ResourceId {
            resource_group: "rg1".to_string(),
            zone_name: "zone1".to_string(),
            record_name: "ptr1".to_string(),
        };
        let raw = id.format("sub1");
        assert_eq!(ResourceId::parse(&raw).unwrap(), id);
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(ResourceId::parse("").unwrap_err().to_string().contains("empty"));
        assert!(ResourceId::parse("///").is_err());
    }

    #[test]
    fn rejects_identifier_without_resource_group() {
        let raw = "/subscriptions/sub1/providers/Microsoft.Network/dnszones/zone1/PTR/ptr1";
        let err = ResourceId::parse(raw).unwrap_err();
        assert!(err.to_string().contains("resourceGroups"), "{err}");
    }

    #[test]
    fn rejects_identifier_without_zone_or_record_components() {
        let raw = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network";
        assert!(ResourceId::parse(raw).is_err());

        let raw = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/dnszones/zone1";
        let err = ResourceId::parse(raw).unwrap_err();
        assert!(err.to_string().contains("PTR"), "{err}");
    }

    #[test]
    fn rejects_dangling_path_segment() {
        let raw = "/subscriptions/sub1/resourceGroups/rg1/providers";
        let err = ResourceId::parse(raw).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
