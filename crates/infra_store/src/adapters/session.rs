//! Session document adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

use core_kernel::{DocumentStore, DomainPort, PortError};
use domain_admin::{Session, SessionPort};

use crate::SESSION_KEY;

/// `SessionPort` over a document store
#[derive(Clone)]
pub struct DocumentSessionAdapter {
    store: Arc<dyn DocumentStore>,
}

impl DocumentSessionAdapter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl DomainPort for DocumentSessionAdapter {}

#[async_trait]
impl SessionPort for DocumentSessionAdapter {
    #[instrument(skip(self))]
    async fn current_session(&self) -> Result<Option<Session>, PortError> {
        match self.store.get(SESSION_KEY).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => match serde_json::from_value(value) {
                Ok(session) => Ok(Some(session)),
                Err(e) => {
                    // An unreadable session counts as logged out
                    warn!(error = %e, "Discarding unreadable session document");
                    Ok(None)
                }
            },
        }
    }

    #[instrument(skip(self, session), fields(email = %session.email))]
    async fn start_session(&self, session: &Session) -> Result<(), PortError> {
        let value = serde_json::to_value(session)
            .map_err(|e| PortError::transformation(format!("Session could not be encoded: {e}")))?;
        self.store.set(SESSION_KEY, value).await
    }

    #[instrument(skip(self))]
    async fn end_session(&self) -> Result<(), PortError> {
        self.store.remove(SESSION_KEY).await
    }
}
