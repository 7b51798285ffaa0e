//! Trait definitions for external collaborators

pub mod dns_service;

pub use dns_service::DnsService;
