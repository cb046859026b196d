//! Admin document adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument, warn};

use core_kernel::{DocumentStore, DomainPort, PortError};
use domain_admin::{AdminConfig, AdminPort};

use crate::ADMIN_KEY;

/// `AdminPort` over a document store
#[derive(Clone)]
pub struct DocumentAdminAdapter {
    store: Arc<dyn DocumentStore>,
}

impl DocumentAdminAdapter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

fn encode(config: &AdminConfig) -> Result<serde_json::Value, PortError> {
    serde_json::to_value(config)
        .map_err(|e| PortError::transformation(format!("Admin document could not be encoded: {e}")))
}

impl DomainPort for DocumentAdminAdapter {}

#[async_trait]
impl AdminPort for DocumentAdminAdapter {
    #[instrument(skip(self))]
    async fn load_admin(&self) -> Result<AdminConfig, PortError> {
        let stored = self.store.get(ADMIN_KEY).await?;
        let config = AdminConfig::from_document(stored.clone());
        match stored {
            None => {
                self.store.set(ADMIN_KEY, encode(&config)?).await?;
                info!("Admin document created with defaults");
            }
            Some(Value::Object(mut document)) => {
                let filled = AdminConfig::fill_missing_sections(&mut document).map_err(|e| {
                    PortError::transformation(format!("Admin defaults could not be encoded: {e}"))
                })?;
                if filled {
                    self.store.set(ADMIN_KEY, Value::Object(document)).await?;
                }
            }
            // Left in place until the next explicit save
            Some(_) => warn!("Stored admin document is not an object"),
        }
        Ok(config)
    }

    #[instrument(skip(self, config))]
    async fn save_admin(&self, config: &AdminConfig) -> Result<(), PortError> {
        self.store.set(ADMIN_KEY, encode(config)?).await
    }

    #[instrument(skip(self))]
    async fn reset_admin(&self) -> Result<AdminConfig, PortError> {
        self.store.remove(ADMIN_KEY).await?;
        info!("Admin document reset to defaults");
        self.load_admin().await
    }
}
