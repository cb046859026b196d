//! Request handlers

pub mod health;
pub mod session;
pub mod admin;
pub mod claims;
pub mod items;
pub mod inspections;
pub mod report;

use chrono::NaiveDate;

use core_kernel::ClaimId;
use domain_claims::{Claim, DepreciationPolicy};

use crate::error::ApiError;
use crate::AppState;

/// Loads a claim by its path id
pub(crate) async fn load_claim(state: &AppState, raw_id: &str) -> Result<Claim, ApiError> {
    let id: ClaimId = raw_id.parse()?;
    Ok(state.claims.get_claim(&id).await?)
}

/// The depreciation policy currently configured by the admin
pub(crate) async fn current_policy(state: &AppState) -> Result<DepreciationPolicy, ApiError> {
    Ok(state.admin.load_admin().await?.dep)
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
