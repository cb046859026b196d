//! Core Kernel - Foundational types and utilities for the survey system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and report formatting
//! - Lenient numeric coercion for form-shaped JSON documents
//! - Claim identifiers
//! - The key-value document store port and its error type

pub mod money;
pub mod numeric;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, round_half_up, format_amount};
pub use numeric::{coerce_decimal, coerce_u64};
pub use identifiers::ClaimId;
pub use ports::{
    PortError, DomainPort, DocumentStore, AdapterHealth, HealthCheckResult, HealthCheckable,
};
pub use error::CoreError;
