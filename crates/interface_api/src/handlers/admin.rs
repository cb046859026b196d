//! Admin handlers

use axum::{extract::{Path, State}, Json};
use tracing::info;

use domain_admin::{AdminConfig, AdminList};
use domain_claims::DepreciationPolicy;

use crate::dto::admin::AddEntryRequest;
use crate::{AppState, error::ApiError};

pub async fn get_admin(State(state): State<AppState>) -> Result<Json<AdminConfig>, ApiError> {
    Ok(Json(state.admin.load_admin().await?))
}

/// Replaces the depreciation policy; missing or non-numeric fields become 0
pub async fn update_depreciation(
    State(state): State<AppState>,
    Json(dep): Json<DepreciationPolicy>,
) -> Result<Json<AdminConfig>, ApiError> {
    let mut admin = state.admin.load_admin().await?;
    admin.set_depreciation(dep);
    state.admin.save_admin(&admin).await?;
    info!(parts = %admin.dep.parts_pct, paint = %admin.dep.paint_pct, "Depreciation policy updated");
    Ok(Json(admin))
}

pub async fn reset_admin(State(state): State<AppState>) -> Result<Json<AdminConfig>, ApiError> {
    Ok(Json(state.admin.reset_admin().await?))
}

/// Appends to a pick list; blank input leaves the list unchanged
pub async fn add_entry(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(request): Json<AddEntryRequest>,
) -> Result<Json<AdminConfig>, ApiError> {
    let list: AdminList = list.parse()?;
    let mut admin = state.admin.load_admin().await?;
    if admin.add_entry(list, &request.value) {
        state.admin.save_admin(&admin).await?;
    }
    Ok(Json(admin))
}

/// Removes from a pick list; an index past the end is ignored
pub async fn remove_entry(
    State(state): State<AppState>,
    Path((list, index)): Path<(String, usize)>,
) -> Result<Json<AdminConfig>, ApiError> {
    let list: AdminList = list.parse()?;
    let mut admin = state.admin.load_admin().await?;
    if admin.remove_entry(list, index).is_some() {
        state.admin.save_admin(&admin).await?;
    }
    Ok(Json(admin))
}
