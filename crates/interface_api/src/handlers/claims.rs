//! Claims handlers

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;

use domain_claims::Claim;
use domain_policyholder::PolicyType;
use domain_services::{ClaimFrequency, PolicyTypeTotals};

use crate::{AppState, error::ApiError};
use crate::dto::claims::{CreateClaimRequest, FrequencyQuery};

/// Files a claim
pub async fn create_claim(
    State(state): State<AppState>,
    request: Result<Json<CreateClaimRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    let Json(request) = request?;
    let claim = state.registry.create_claim(request.into()).await?;
    Ok((StatusCode::CREATED, Json(claim)))
}

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.registry.list_claims().await?))
}

/// Counts the claims of one policyholder
pub async fn claim_frequency(
    State(state): State<AppState>,
    query: Result<Query<FrequencyQuery>, QueryRejection>,
) -> Result<Json<ClaimFrequency>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.analytics.claim_frequency(query.policyholder_id).await?))
}

/// Claim count and total per policy type
pub async fn aggregate_by_policy_type(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<PolicyType, PolicyTypeTotals>>, ApiError> {
    Ok(Json(state.analytics.aggregate_by_policy_type().await?))
}
