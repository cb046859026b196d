//! Claim list adapter
//!
//! The whole claim list is stored as one JSON array under `claims`, newest
//! first. Every write reads the list, changes it and writes it back.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use core_kernel::{ClaimId, DocumentStore, DomainPort, PortError};
use domain_claims::{Claim, ClaimsPort};

use crate::CLAIMS_KEY;

/// One entry of the stored list
enum StoredClaim {
    Readable(Claim),
    /// Kept verbatim so a save never drops it
    Unreadable(Value),
}

impl StoredClaim {
    fn decode(row: Value) -> Self {
        match serde_json::from_value::<Claim>(row.clone()) {
            Ok(claim) => StoredClaim::Readable(claim),
            Err(err) => {
                warn!(error = %err, "Skipping unreadable claim row");
                StoredClaim::Unreadable(row)
            }
        }
    }

    fn claim(&self) -> Option<&Claim> {
        match self {
            StoredClaim::Readable(claim) => Some(claim),
            StoredClaim::Unreadable(_) => None,
        }
    }

    fn into_claim(self) -> Option<Claim> {
        match self {
            StoredClaim::Readable(claim) => Some(claim),
            StoredClaim::Unreadable(_) => None,
        }
    }
}

/// `ClaimsPort` over a document store
#[derive(Clone)]
pub struct DocumentClaimsAdapter {
    store: Arc<dyn DocumentStore>,
}

impl DocumentClaimsAdapter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn read_all(&self) -> Result<Vec<StoredClaim>, PortError> {
        match self.store.get(CLAIMS_KEY).await? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(rows)) => Ok(rows.into_iter().map(StoredClaim::decode).collect()),
            Some(_) => Err(PortError::transformation("Stored claim list is not an array")),
        }
    }

    async fn write_all(&self, rows: Vec<StoredClaim>) -> Result<(), PortError> {
        let rows = rows
            .into_iter()
            .map(|row| match row {
                StoredClaim::Readable(claim) => serde_json::to_value(claim),
                StoredClaim::Unreadable(raw) => Ok(raw),
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PortError::transformation(format!("Claim list could not be encoded: {e}")))?;
        self.store.set(CLAIMS_KEY, Value::Array(rows)).await
    }
}

impl DomainPort for DocumentClaimsAdapter {}

#[async_trait]
impl ClaimsPort for DocumentClaimsAdapter {
    #[instrument(skip(self))]
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let claims: Vec<Claim> = self
            .read_all()
            .await?
            .into_iter()
            .filter_map(StoredClaim::into_claim)
            .collect();
        debug!(count = claims.len(), "Loaded claim list");
        Ok(claims)
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError> {
        self.read_all()
            .await?
            .into_iter()
            .filter_map(StoredClaim::into_claim)
            .find(|claim| &claim.id == id)
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn insert_claim(&self, claim: Claim) -> Result<(), PortError> {
        let mut rows = self.read_all().await?;
        rows.insert(0, StoredClaim::Readable(claim));
        self.write_all(rows).await
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError> {
        let mut rows = self.read_all().await?;
        let slot = rows
            .iter()
            .position(|row| row.claim().is_some_and(|c| c.id == claim.id))
            .ok_or_else(|| PortError::not_found("Claim", &claim.id))?;
        rows[slot] = StoredClaim::Readable(claim.clone());
        self.write_all(rows).await?;
        debug!("Claim saved");
        Ok(())
    }
}
