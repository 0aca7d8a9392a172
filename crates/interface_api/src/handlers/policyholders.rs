//! Policyholder handlers

use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};

use domain_policyholder::Policyholder;

use crate::{AppState, error::ApiError};
use crate::dto::policyholders::CreatePolicyholderRequest;

/// Registers a policyholder
pub async fn create_policyholder(
    State(state): State<AppState>,
    request: Result<Json<CreatePolicyholderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Policyholder>), ApiError> {
    let Json(request) = request?;
    let policyholder = state.registry.create_policyholder(request.into()).await?;
    Ok((StatusCode::CREATED, Json(policyholder)))
}

/// Lists policyholders
pub async fn list_policyholders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Policyholder>>, ApiError> {
    Ok(Json(state.registry.list_policyholders().await?))
}

/// Lists policyholders flagged as high risk
pub async fn high_risk_policyholders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Policyholder>>, ApiError> {
    Ok(Json(state.analytics.high_risk_policyholders().await?))
}
