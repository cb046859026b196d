//! Survey report handlers

use axum::{extract::{Path, State}, response::Html, Json};
use tracing::info;

use domain_claims::generate_report;

use crate::dto::claims::ReportResponse;
use crate::handlers::{current_policy, load_claim};
use crate::{AppState, error::ApiError};

/// Previews the report from the stored aggregates; the claim is not changed
pub async fn preview_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let claim = load_claim(&state, &id).await?;
    Ok(Json(generate_report(&claim).into()))
}

/// Recomputes the claim, produces its report and marks it Generated
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let policy = current_policy(&state).await?;
    let mut claim = load_claim(&state, &id).await?;
    claim.recompute(&policy);
    let report = generate_report(&claim);
    claim.mark_generated();
    state.claims.save_claim(&claim).await?;
    info!(claim_id = %claim.id, net_assessed = %report.net_assessed, "Report generated");
    Ok(Json(report.into()))
}

/// Printable HTML of the report
pub async fn report_html(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let claim = load_claim(&state, &id).await?;
    Ok(Html(generate_report(&claim).to_html()))
}
