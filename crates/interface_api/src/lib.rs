//! HTTP API Layer
//!
//! This crate provides the REST API for the motor survey system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for session, admin, claims, items, reinspections, uploads and reports
//! - **Middleware**: Session check, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let state = AppState::from_config(ApiConfig::from_env()?).await?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{DocumentStore, HealthCheckable};
use domain_admin::{AdminPort, SessionPort};
use domain_claims::ClaimsPort;
use infra_store::{
    DocumentAdminAdapter, DocumentClaimsAdapter, DocumentSessionAdapter, FileDocumentStore,
    InMemoryDocumentStore, StoreError,
};

use crate::config::{ApiConfig, StorageKind};
use crate::middleware::{session_middleware, audit_middleware};
use crate::handlers::{admin, claims, health, inspections, items, report, session};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimsPort>,
    pub admin: Arc<dyn AdminPort>,
    pub session: Arc<dyn SessionPort>,
    pub storage_health: Arc<dyn HealthCheckable>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires every port to one document store
    pub fn with_store<S>(store: Arc<S>, config: ApiConfig) -> Self
    where
        S: DocumentStore + HealthCheckable,
    {
        let documents: Arc<dyn DocumentStore> = store.clone();
        Self {
            claims: Arc::new(DocumentClaimsAdapter::new(documents.clone())),
            admin: Arc::new(DocumentAdminAdapter::new(documents.clone())),
            session: Arc::new(DocumentSessionAdapter::new(documents)),
            storage_health: store,
            config,
        }
    }

    /// Opens the store selected by the configuration
    pub async fn from_config(config: ApiConfig) -> Result<Self, StoreError> {
        match config.storage {
            StorageKind::Memory => Ok(Self::with_store(Arc::new(InMemoryDocumentStore::new()), config)),
            StorageKind::File => {
                let store = FileDocumentStore::open(&config.data_dir).await?;
                Ok(Self::with_store(Arc::new(store), config))
            }
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Ports and configuration shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/v1/session", get(session::current_session))
        .route("/api/v1/session/login", post(session::login))
        .route("/api/v1/session/logout", post(session::logout));

    // Admin routes
    let admin_routes = Router::new()
        .route("/", get(admin::get_admin))
        .route("/depreciation", put(admin::update_depreciation))
        .route("/reset", post(admin::reset_admin))
        .route("/:list", post(admin::add_entry))
        .route("/:list/:index", axum::routing::delete(admin::remove_entry));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim).put(claims::update_claim))
        .route("/:id/status", put(claims::update_status))
        .route("/:id/assessment", put(claims::update_assessment))
        .route("/:id/items", post(items::add_item).delete(items::clear_items))
        .route("/:id/items/:index", put(items::update_item).delete(items::remove_item))
        .route(
            "/:id/reinspections",
            post(inspections::add_reinspection).delete(inspections::clear_reinspections),
        )
        .route("/:id/reinspections/:index", axum::routing::delete(inspections::remove_reinspection))
        .route("/:id/uploads", post(inspections::add_uploads))
        .route("/:id/uploads/:index", axum::routing::delete(inspections::remove_upload))
        .route("/:id/report", get(report::preview_report).post(report::generate))
        .route("/:id/report/html", get(report::report_html));

    // Protected API routes
    let api_routes = Router::new()
        .route("/dashboard", get(claims::dashboard))
        .nest("/admin", admin_routes)
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), session_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
