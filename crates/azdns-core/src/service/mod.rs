//! Bundled `DnsService` implementations

pub mod memory;

pub use memory::InMemoryDnsService;
