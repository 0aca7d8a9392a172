//! HTTP API Layer
//!
//! This crate exposes the claims ledger over HTTP using Axum. Handlers are
//! thin: they decode the request, call one service operation and encode the
//! result.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for policyholders, claims and reports
//! - **Middleware**: Access logging and request tracing
//! - **DTOs**: Request data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(RecordStores::on_disk(&config.store_config()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_services::{AnalyticsService, RecordStores, RegistryService, ReportingService};

use crate::middleware::access_log_middleware;
use crate::handlers::{claims, health, policyholders, reports};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: RegistryService,
    pub analytics: AnalyticsService,
    pub reports: ReportingService,
}

impl AppState {
    pub fn new(stores: RecordStores) -> Self {
        Self {
            registry: RegistryService::new(stores.clone()),
            analytics: AnalyticsService::new(stores.clone()),
            reports: ReportingService::new(stores),
        }
    }
}

/// Creates the main API router over the given collections
pub fn create_router(stores: RecordStores) -> Router {
    let state = AppState::new(stores);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policyholder_routes = Router::new()
        .route(
            "/",
            get(policyholders::list_policyholders).post(policyholders::create_policyholder),
        )
        .route("/high-risk", get(policyholders::high_risk_policyholders));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/frequency", get(claims::claim_frequency))
        .route("/aggregate-by-policy-type", get(claims::aggregate_by_policy_type));

    let report_routes = Router::new()
        .route("/monthly-claims", get(reports::monthly_claims))
        .route("/average-claim-by-policy-type", get(reports::average_claim_by_policy_type))
        .route("/highest-claim-of-all-time", get(reports::highest_claim_of_all_time))
        .route("/pending-claims", get(reports::pending_claims));

    Router::new()
        .merge(health_routes)
        .nest("/policyholders", policyholder_routes)
        .nest("/claims", claims_routes)
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn(access_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
