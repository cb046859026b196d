//! Administration Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::config::AdminConfig;
use crate::session::Session;

#[async_trait]
pub trait AdminPort: DomainPort {
    /// Loads the admin document with every missing section filled with
    /// defaults; the filled document is written back
    async fn load_admin(&self) -> Result<AdminConfig, PortError>;

    /// Replaces the admin document
    async fn save_admin(&self, config: &AdminConfig) -> Result<(), PortError>;

    /// Discards the stored document and returns the rebuilt defaults
    async fn reset_admin(&self) -> Result<AdminConfig, PortError>;
}

#[async_trait]
pub trait SessionPort: DomainPort {
    async fn current_session(&self) -> Result<Option<Session>, PortError>;

    async fn start_session(&self, session: &Session) -> Result<(), PortError>;

    async fn end_session(&self) -> Result<(), PortError>;
}
