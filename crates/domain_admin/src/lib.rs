//! Survey Administration Domain
//!
//! The admin document holds the pick lists shown on claim screens and the
//! depreciation policy every assessment is computed with. The session
//! document records who is logged in.

pub mod config;
pub mod session;
pub mod ports;
pub mod error;

pub use config::{AdminConfig, AdminList};
pub use session::Session;
pub use ports::{AdminPort, SessionPort};
pub use error::AdminError;
