// # Azure Resource Manager DNS Service
//
// This crate provides the `DnsService` implementation over the Azure DNS
// REST API (Microsoft.Network/dnszones record sets).
//
// ## Responsibility boundaries
//
// - Makes one HTTP request per trait method invocation
// - Full error propagation to the caller (the engine owns retries,
//   backoff, and rate limiting)
// - HTTP timeout configured (30 seconds)
// - Specific handling for 401/403, 404, 412, 429, and 5xx statuses
// - NO token acquisition (the caller supplies a pre-acquired bearer token)
// - NO caching (state is owned by the engine's snapshot)
//
// ## Security
//
// - The bearer token NEVER appears in logs
// - The Debug implementation redacts the token
// - Construction fails fast on an empty token
//
// ## API Reference
//
// - Record sets: PUT/GET/DELETE
//   `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Network/dnszones/{zone}/{type}/{name}`
// - api-version 2018-05-01

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use azdns_core::error::{Error, Result};
use azdns_core::records::{PtrRecord, RecordSet, RecordSetProperties, RecordType};
use azdns_core::traits::DnsService;

/// ARM management endpoint
const ARM_API_BASE: &str = "https://management.azure.com";

/// DNS record set API version
const DNS_API_VERSION: &str = "2018-05-01";

/// Default HTTP timeout for ARM requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Azure Resource Manager DNS service
///
/// Stateless single-shot client: each trait method issues exactly one
/// HTTP request and maps the response. The adapter and engine own all
/// coordination.
pub struct ArmDnsService {
    /// Pre-acquired bearer token
    /// ⚠️ NEVER log this value
    bearer_token: String,

    /// Subscription every record set path is scoped under
    subscription_id: String,

    /// Management endpoint; overridable for tests
    base_url: String,

    /// HTTP client for API requests
    http: reqwest::Client,
}

// Custom Debug implementation that hides the bearer token
impl std::fmt::Debug for ArmDnsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArmDnsService")
            .field("bearer_token", &"<REDACTED>")
            .field("subscription_id", &self.subscription_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ArmDnsService {
    /// Create a service against the public ARM endpoint
    ///
    /// # Parameters
    ///
    /// - `subscription_id`: Subscription containing the DNS zones
    /// - `bearer_token`: Pre-acquired ARM bearer token with DNS Zone
    ///   Contributor permissions; token acquisition is the caller's concern
    pub fn new(subscription_id: impl Into<String>, bearer_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(subscription_id, bearer_token, ARM_API_BASE)
    }

    /// Create a service against a custom management endpoint
    ///
    /// Used by tests and by sovereign-cloud deployments with their own
    /// ARM endpoints.
    pub fn with_base_url(
        subscription_id: impl Into<String>,
        bearer_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let bearer_token = bearer_token.into();
        if bearer_token.is_empty() {
            return Err(Error::validation("ARM bearer token cannot be empty"));
        }
        let subscription_id = subscription_id.into();
        if subscription_id.is_empty() {
            return Err(Error::validation("subscription id cannot be empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|err| Error::remote("arm", format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            bearer_token,
            subscription_id,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn record_set_url(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/dnszones/{}/{}/{}?api-version={}",
            self.base_url,
            self.subscription_id,
            resource_group,
            zone_name,
            record_type.as_str(),
            record_name,
            DNS_API_VERSION,
        )
    }

    /// Map a non-success ARM response onto the adapter's error kinds
    async fn map_error_status(resource: &str, response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error response".to_string());

        match status.as_u16() {
            401 | 403 => Error::remote(
                resource,
                format!("authentication failed: invalid or expired token, status {status}"),
            ),
            404 => Error::not_found(format!("{resource} (status {status})")),
            412 => Error::remote(
                resource,
                format!("precondition failed (etag mismatch): status {status} - {body}"),
            ),
            429 => Error::remote(resource, format!("rate limited: status {status} - {body}")),
            500..=599 => Error::remote(resource, format!("server error: status {status} - {body}")),
            _ => Error::remote(resource, format!("unexpected status {status} - {body}")),
        }
    }
}

#[async_trait]
impl DnsService for ArmDnsService {
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
        let url = self.record_set_url(resource_group, zone_name, record_name, record_type);
        tracing::debug!(record = record_name, zone = zone_name, "PUT record set");

        let body = WireUpsertBody {
            properties: properties.into(),
        };
        let mut request = self
            .http
            .put(&url)
            .bearer_auth(&self.bearer_token)
            .json(&body);
        // Empty tokens mean "no header at all"; ARM treats a present empty
        // If-Match as a malformed precondition.
        if !etag.is_empty() {
            request = request.header(reqwest::header::IF_MATCH, etag);
        }
        if !if_none_match.is_empty() {
            request = request.header(reqwest::header::IF_NONE_MATCH, if_none_match);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::remote(record_name, format!("HTTP request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(Self::map_error_status(record_name, response).await);
        }

        let wire: WireRecordSet = response.json().await.map_err(|err| {
            Error::protocol(format!(
                "undecodable upsert response for record set {record_name:?}: {err}"
            ))
        })?;
        Ok(wire.into())
    }

    async fn get(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<RecordSet> {
        let url = self.record_set_url(resource_group, zone_name, record_name, record_type);
        tracing::debug!(record = record_name, zone = zone_name, "GET record set");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(|err| Error::remote(record_name, format!("HTTP request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(Self::map_error_status(record_name, response).await);
        }

        let wire: WireRecordSet = response.json().await.map_err(|err| {
            Error::protocol(format!(
                "undecodable get response for record set {record_name:?}: {err}"
            ))
        })?;
        Ok(wire.into())
    }

    async fn delete(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        etag: &str,
    ) -> Result<()> {
        let url = self.record_set_url(resource_group, zone_name, record_name, record_type);
        tracing::debug!(record = record_name, zone = zone_name, "DELETE record set");

        let mut request = self.http.delete(&url).bearer_auth(&self.bearer_token);
        if !etag.is_empty() {
            request = request.header(reqwest::header::IF_MATCH, etag);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::remote(record_name, format!("HTTP request failed: {err}")))?;

        // 200 = deleted, 204 = nothing to delete; both are OK-class.
        if !response.status().is_success() {
            return Err(Self::map_error_status(record_name, response).await);
        }
        Ok(())
    }

    fn service_name(&self) -> &'static str {
        "arm"
    }
}

/// ARM wire shape of a record set
///
/// The REST API capitalizes `TTL` and `PTRRecords` inside the properties
/// bag; everything else is camelCase.
#[derive(Debug, Serialize, Deserialize)]
struct WireRecordSet {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    etag: Option<String>,
    properties: WireRecordSetProperties,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireRecordSetProperties {
    #[serde(rename = "TTL")]
    ttl: i64,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
    #[serde(rename = "PTRRecords", default)]
    ptr_records: Vec<WirePtrRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePtrRecord {
    ptrdname: String,
}

/// PUT body: properties only, identifiers travel in the path
#[derive(Debug, Serialize)]
struct WireUpsertBody {
    properties: WireRecordSetProperties,
}

impl From<RecordSetProperties> for WireRecordSetProperties {
    fn from(properties: RecordSetProperties) -> Self {
        Self {
            ttl: properties.ttl,
            metadata: properties.metadata,
            ptr_records: properties
                .ptr_records
                .into_iter()
                .map(|record| WirePtrRecord {
                    ptrdname: record.ptrdname,
                })
                .collect(),
        }
    }
}

impl From<WireRecordSet> for RecordSet {
    fn from(wire: WireRecordSet) -> Self {
        Self {
            id: wire.id,
            etag: wire.etag,
            properties: RecordSetProperties {
                ttl: wire.properties.ttl,
                metadata: wire.properties.metadata,
                ptr_records: wire
                    .properties
                    .ptr_records
                    .into_iter()
                    .map(|record| PtrRecord {
                        ptrdname: record.ptrdname,
                    })
                    .collect(),
            },
        }
    }
}
