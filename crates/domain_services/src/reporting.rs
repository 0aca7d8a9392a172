//! Claim reports

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use core_kernel::YearMonth;
use domain_claims::Claim;
use domain_policyholder::PolicyType;

use crate::analytics::policy_type_totals;
use crate::error::ServiceError;
use crate::stores::RecordStores;

/// The largest claim on record, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestClaim {
    pub highest_claim: Option<Claim>,
}

/// Monthly, per-type and status reports over the claim collection
#[derive(Debug, Clone)]
pub struct ReportingService {
    stores: RecordStores,
}

impl ReportingService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    /// Number of claims filed in each calendar month
    pub async fn monthly_claims(&self) -> Result<BTreeMap<YearMonth, usize>, ServiceError> {
        let claims = self.stores.claims.load().await?;

        let mut months: BTreeMap<YearMonth, usize> = BTreeMap::new();
        for claim in &claims {
            *months.entry(YearMonth::of(claim.date_filed)).or_default() += 1;
        }

        debug!(months = months.len(), "Computed monthly claim counts");
        Ok(months)
    }

    /// Mean claim amount for each policy type that has at least one claim
    pub async fn average_claim_by_policy_type(
        &self,
    ) -> Result<BTreeMap<PolicyType, Decimal>, ServiceError> {
        let policyholders = self.stores.policyholders.load().await?;
        let claims = self.stores.claims.load().await?;

        let averages: BTreeMap<PolicyType, Decimal> = policy_type_totals(&policyholders, &claims)
            .into_iter()
            .filter_map(|(policy_type, totals)| totals.average().map(|mean| (policy_type, mean)))
            .collect();

        debug!(policy_types = averages.len(), "Computed average claim by policy type");
        Ok(averages)
    }

    /// The claim with the largest amount
    ///
    /// Ties go to the claim that comes first in the collection. An empty
    /// collection yields `highest_claim: None`.
    pub async fn highest_claim_of_all_time(&self) -> Result<HighestClaim, ServiceError> {
        let claims = self.stores.claims.load().await?;
        Ok(HighestClaim {
            highest_claim: largest_claim(claims),
        })
    }

    /// Claims still awaiting a decision, in collection order
    pub async fn pending_claims(&self) -> Result<Vec<Claim>, ServiceError> {
        let claims = self.stores.claims.load().await?;
        let pending: Vec<Claim> = claims.into_iter().filter(Claim::is_pending).collect();

        debug!(pending = pending.len(), "Listed pending claims");
        Ok(pending)
    }
}

/// Stable max-scan over claim amounts: a later claim replaces the current
/// best only when strictly larger
pub fn largest_claim(claims: Vec<Claim>) -> Option<Claim> {
    claims.into_iter().fold(None, |best, claim| match best {
        Some(current) if current.amount >= claim.amount => Some(current),
        _ => Some(claim),
    })
}
