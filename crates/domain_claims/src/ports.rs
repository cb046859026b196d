//! Claims Domain Ports
//!
//! The `ClaimsPort` trait is what the claim screens need from storage. The
//! whole claim list is one document: every write replaces it, and the last
//! writer wins.
//!
//! ```rust,ignore
//! let claims: Arc<dyn ClaimsPort> = Arc::new(DocumentClaimsAdapter::new(store));
//! let mut claim = claims.get_claim(&id).await?;
//! claim.add_item(&admin.dep);
//! claims.save_claim(&claim).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::Claim;

#[async_trait]
pub trait ClaimsPort: DomainPort {
    /// All claims, newest first
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// One claim by id
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError>;

    /// Stores a new claim at the front of the list
    async fn insert_claim(&self, claim: Claim) -> Result<(), PortError>;

    /// Replaces the stored claim with the same id
    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError>;
}
