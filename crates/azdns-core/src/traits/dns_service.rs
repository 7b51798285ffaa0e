// # DNS Service Trait
//
// Defines the interface to the remote cloud DNS service.
//
// ## Implementations
//
// - Azure Resource Manager REST: `azdns-arm` crate
// - In-memory (tests, embedding): `azdns_core::service::InMemoryDnsService`
//
// ## Responsibility boundaries
//
// Implementations issue exactly one remote call per method invocation.
// Retry, throttling, and scheduling policy belong to the reconciliation
// engine driving the adapter; caching belongs to the engine's state
// snapshot. Implementations impose no locking of their own: the engine
// guarantees at most one in-flight operation per resource.

use async_trait::async_trait;

use crate::error::Result;
use crate::records::{RecordSet, RecordSetProperties, RecordType};

/// Trait for remote DNS service implementations
///
/// # Concurrency tokens
///
/// `etag` is a soft concurrency hint: an empty string means "no concurrency
/// check, allow overwrite". `if_none_match` follows the remote API's
/// convention where `"*"` makes the record set immutable after first
/// creation; callers that want later updates pass an empty token.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` and usable across async tasks.
#[async_trait]
pub trait DnsService: Send + Sync {
    /// Upsert a record set and return the service's view of it
    ///
    /// The returned [`RecordSet`] must carry the server-assigned opaque
    /// identifier; callers treat its absence as a contract violation.
    async fn create_or_update(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        properties: RecordSetProperties,
        etag: &str,
        if_none_match: &str,
    ) -> Result<RecordSet>;

    /// Fetch a record set scoped by group, zone, name, and type
    ///
    /// A missing record set is reported as [`crate::Error::NotFound`], the
    /// one failure shape the adapter reinterprets as normal state. Any
    /// other failure must surface as-is.
    async fn get(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<RecordSet>;

    /// Delete a record set
    ///
    /// `etag` follows the same soft-hint convention as upsert; an empty
    /// token deletes unconditionally. Only an OK-class completion returns
    /// `Ok`.
    async fn delete(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_name: &str,
        record_type: RecordType,
        etag: &str,
    ) -> Result<()>;

    /// Service name for logging/debugging (e.g., "arm", "memory")
    fn service_name(&self) -> &'static str;
}
