//! Estimate line item handlers
//!
//! Every change recomputes the whole claim under the current policy before
//! it is saved.

use axum::{extract::{Path, State}, http::StatusCode, Json};

use domain_claims::LineItemPatch;

use crate::dto::claims::ItemsResponse;
use crate::handlers::{current_policy, load_claim};
use crate::{AppState, error::ApiError};

/// Appends a default part item
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ItemsResponse>), ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;
    claim.add_item(&policy);
    state.claims.save_claim(&claim).await?;
    Ok((StatusCode::CREATED, Json(ItemsResponse::from(&claim))))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(patch): Json<LineItemPatch>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;
    claim.update_item(index, &patch, &policy)?;
    state.claims.save_claim(&claim).await?;
    Ok(Json(ItemsResponse::from(&claim)))
}

/// Removes one item; an index past the end changes nothing
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;
    if claim.remove_item(index, &policy).is_some() {
        state.claims.save_claim(&claim).await?;
    }
    Ok(Json(ItemsResponse::from(&claim)))
}

pub async fn clear_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;
    claim.clear_items(&policy);
    state.claims.save_claim(&claim).await?;
    Ok(Json(ItemsResponse::from(&claim)))
}
