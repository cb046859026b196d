//! Session handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use domain_admin::Session;

use crate::dto::session::{LoginRequest, SessionResponse};
use crate::{AppState, error::ApiError};

/// Starts a session; any credentials are accepted
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = Session::login(request.email, &request.password);
    if session.email.is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }
    state.session.start_session(&session).await?;
    info!(email = %session.email, "Logged in");
    Ok(Json(SessionResponse { email: session.email }))
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.session.end_session().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the logged-in surveyor, or 401
pub async fn current_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .session
        .current_session()
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(SessionResponse { email: session.email }))
}
