// # azdns-core
//
// Core library for declarative Azure DNS resource management.
//
// ## Architecture Overview
//
// This library provides the contract half of a resource adapter:
// - **PtrRecordSpec**: Typed desired state for one PTR record set
// - **PtrRecordState**: Last-known remote snapshot, refreshed by reads
// - **PtrRecordAdapter**: The four caller-driven entry points
//   (create-or-update, read, delete, import)
// - **DnsService**: Trait seam to the remote DNS service
// - **InMemoryDnsService**: Service implementation for tests and embedding
//
// ## Design Principles
//
// 1. **Caller-driven**: The reconciliation engine invokes entry points;
//    the adapter never initiates calls on its own
// 2. **Typed configuration**: One struct per resource kind, no dynamic
//    attribute bags or runtime type assertions
// 3. **Explicit dependencies**: The service handle is injected at
//    construction, never looked up from ambient context
// 4. **Read is truth**: Every successful read overwrites the whole local
//    snapshot; upsert responses are not trusted as complete

pub mod adapter;
pub mod config;
pub mod error;
pub mod records;
pub mod resource_id;
pub mod service;
pub mod state;
pub mod traits;

// Re-export core types for convenience
pub use adapter::{PtrRecordAdapter, ReadOutcome};
pub use config::PtrRecordSpec;
pub use error::{Error, Result};
pub use records::{PtrRecord, RecordSet, RecordSetProperties, RecordType};
pub use resource_id::ResourceId;
pub use service::InMemoryDnsService;
pub use state::PtrRecordState;
pub use traits::DnsService;
