//! Claims handlers

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use tracing::info;

use domain_claims::{Assessment, Claim, ClaimFilter, ClaimStatus, StatusCounts};

use crate::dto::claims::*;
use crate::handlers::{current_policy, load_claim, today};
use crate::{AppState, error::ApiError};

/// Status tiles
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let claims = state.claims.list_claims().await?;
    let counts = StatusCounts::tally(&claims);
    Ok(Json(DashboardResponse {
        total: counts.total(),
        counts,
    }))
}

/// Lists claims, newest first, filtered by the query string
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ClaimListQuery>,
) -> Result<Json<Vec<ClaimSummary>>, ApiError> {
    let filter = ClaimFilter::try_from(query)?;
    let claims = state.claims.list_claims().await?;
    Ok(Json(filter.apply(&claims).into_iter().map(ClaimSummary::from).collect()))
}

/// Creates an empty Pending claim at the top of the list
pub async fn create_claim(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    let policy = current_policy(&state).await?;
    let claim = Claim::new(today(), &policy);
    state.claims.insert_claim(claim.clone()).await?;
    info!(claim_id = %claim.id, "Claim created");
    Ok((StatusCode::CREATED, Json(claim)))
}

pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    Ok(Json(load_claim(&state, &id).await?))
}

/// Saves the claim's detail sections
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<Claim>, ApiError> {
    let mut claim = load_claim(&state, &id).await?;
    request.apply_to(&mut claim);
    state.claims.save_claim(&claim).await?;
    Ok(Json(claim))
}

/// Moves the claim to any status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Claim>, ApiError> {
    let status: ClaimStatus = request.status.parse()?;
    let mut claim = load_claim(&state, &id).await?;
    claim.set_status(status);
    state.claims.save_claim(&claim).await?;
    info!(claim_id = %claim.id, status = %status, "Claim status changed");
    Ok(Json(claim))
}

/// Saves the deductions and recomputes the assessment
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAssessmentRequest>,
) -> Result<Json<Assessment>, ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;

    let assessment = &mut claim.assessment;
    assessment.dep_mode = request.dep_mode;
    assessment.betterment = request.betterment;
    assessment.excess = Some(request.excess.unwrap_or(policy.default_excess));
    assessment.salvage = request.salvage;
    assessment.non_admissible = request.non_admissible;
    claim.recompute(&policy);

    state.claims.save_claim(&claim).await?;
    Ok(Json(claim.assessment))
}
