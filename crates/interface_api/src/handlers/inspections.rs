//! Reinspection and upload handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};

use domain_claims::{Reinspection, UploadRecord};

use crate::dto::claims::{AddReinspectionRequest, AddUploadsRequest};
use crate::handlers::{load_claim, today};
use crate::{AppState, error::ApiError};

/// Adds a reinspection dated today
pub async fn add_reinspection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddReinspectionRequest>,
) -> Result<(StatusCode, Json<Vec<Reinspection>>), ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    claim.add_reinspection(
        Reinspection::on(today())
            .with_reason(request.reason)
            .with_findings(request.findings),
    );
    state.claims.save_claim(&claim).await?;
    Ok((StatusCode::CREATED, Json(claim.reinspections)))
}

pub async fn remove_reinspection(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<Vec<Reinspection>>, ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    if claim.remove_reinspection(index).is_some() {
        state.claims.save_claim(&claim).await?;
    }
    Ok(Json(claim.reinspections))
}

pub async fn clear_reinspections(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Reinspection>>, ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    claim.clear_reinspections();
    state.claims.save_claim(&claim).await?;
    Ok(Json(claim.reinspections))
}

/// Records upload metadata; file contents are not stored
pub async fn add_uploads(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddUploadsRequest>,
) -> Result<(StatusCode, Json<Vec<UploadRecord>>), ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    for record in request.into_records() {
        claim.add_upload(record);
    }
    state.claims.save_claim(&claim).await?;
    Ok((StatusCode::CREATED, Json(claim.uploads)))
}

pub async fn remove_upload(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<Vec<UploadRecord>>, ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    if claim.remove_upload(index).is_some() {
        state.claims.save_claim(&claim).await?;
    }
    Ok(Json(claim.uploads))
}
