//! Report handlers

use axum::{extract::State, Json};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::BTreeMap;

use core_kernel::YearMonth;
use domain_claims::Claim;
use domain_policyholder::PolicyType;
use domain_services::HighestClaim;

use crate::{AppState, error::ApiError};

/// Average amounts rendered as JSON numbers
#[derive(Debug)]
pub struct AverageClaims(pub BTreeMap<PolicyType, Decimal>);

impl Serialize for AverageClaims {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (policy_type, mean) in &self.0 {
            map.serialize_entry(policy_type, &mean.to_f64())?;
        }
        map.end()
    }
}

/// Claims filed per month
pub async fn monthly_claims(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<YearMonth, usize>>, ApiError> {
    Ok(Json(state.reports.monthly_claims().await?))
}

/// Mean claim amount per policy type
pub async fn average_claim_by_policy_type(
    State(state): State<AppState>,
) -> Result<Json<AverageClaims>, ApiError> {
    let averages = state.reports.average_claim_by_policy_type().await?;
    Ok(Json(AverageClaims(averages)))
}

/// The largest claim on record
pub async fn highest_claim_of_all_time(
    State(state): State<AppState>,
) -> Result<Json<HighestClaim>, ApiError> {
    Ok(Json(state.reports.highest_claim_of_all_time().await?))
}

/// Claims awaiting a decision
pub async fn pending_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.reports.pending_claims().await?))
}
