//! Domain Adapters
//!
//! Each adapter implements a domain port over a shared `DocumentStore`,
//! translating between stored JSON documents and domain types.

pub mod claims;
pub mod admin;
pub mod session;

pub use claims::DocumentClaimsAdapter;
pub use admin::DocumentAdminAdapter;
pub use session::DocumentSessionAdapter;
