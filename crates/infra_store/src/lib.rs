//! Infrastructure Storage Layer
//!
//! This crate provides persistence for the survey system. Everything is kept
//! as whole JSON documents under three keys:
//!
//! - `admin`: pick lists and the depreciation policy
//! - `claims`: the full claim list, newest first
//! - `session`: the logged-in surveyor
//!
//! Two `DocumentStore` implementations are available: an in-memory map for
//! tests and ephemeral runs, and a directory of `<key>.json` files.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_store::{FileDocumentStore, DocumentClaimsAdapter};
//!
//! let store = Arc::new(FileDocumentStore::open("./data").await?);
//! let claims = DocumentClaimsAdapter::new(store.clone());
//! let all = claims.list_claims().await?;
//! ```

pub mod error;
pub mod memory;
pub mod file;
pub mod adapters;

pub use error::StoreError;
pub use memory::InMemoryDocumentStore;
pub use file::FileDocumentStore;
pub use adapters::{DocumentAdminAdapter, DocumentClaimsAdapter, DocumentSessionAdapter};

/// Storage key of the admin document
pub const ADMIN_KEY: &str = "admin";
/// Storage key of the claim list document
pub const CLAIMS_KEY: &str = "claims";
/// Storage key of the session document
pub const SESSION_KEY: &str = "session";
