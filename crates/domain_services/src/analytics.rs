//! Claim analytics
//!
//! Pure reads: every call loads the collections fresh and computes over the
//! snapshot. The computations themselves are plain functions over slices so
//! they can be reused and tested without a store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use core_kernel::{today, trailing_window_start, PolicyholderId};
use domain_claims::Claim;
use domain_policyholder::{Policyholder, PolicyType};

use crate::error::ServiceError;
use crate::stores::RecordStores;

/// A holder is high risk with more than this many recent claims
pub const RECENT_CLAIMS_THRESHOLD: usize = 3;

/// A holder is high risk when total claimed exceeds this share of the sum insured
pub const EXPOSURE_RATIO_THRESHOLD: Decimal = dec!(0.8);

/// Length of the "recent claims" window, in days
pub const RECENT_WINDOW_DAYS: u64 = 365;

/// Number of claims filed by one policyholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimFrequency {
    pub policyholder_id: PolicyholderId,
    pub claim_count: usize,
}

/// Claim count and total claimed amount for one policy type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTypeTotals {
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl PolicyTypeTotals {
    fn add(&mut self, amount: Decimal) {
        self.count += 1;
        self.total_amount += amount;
    }

    /// Mean claim amount, or `None` when no claims were counted
    pub fn average(&self) -> Option<Decimal> {
        (self.count > 0).then(|| self.total_amount / Decimal::from(self.count))
    }
}

/// Frequency, risk and per-type analytics
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    stores: RecordStores,
}

impl AnalyticsService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    /// Counts the claims filed by `policyholder_id`
    ///
    /// An id with no claims (including one that names no policyholder) counts 0.
    pub async fn claim_frequency(
        &self,
        policyholder_id: PolicyholderId,
    ) -> Result<ClaimFrequency, ServiceError> {
        let claims = self.stores.claims.load().await?;
        let claim_count = claims.iter().filter(|c| c.is_filed_by(policyholder_id)).count();

        debug!(%policyholder_id, claim_count, "Computed claim frequency");
        Ok(ClaimFrequency {
            policyholder_id,
            claim_count,
        })
    }

    /// Policyholders flagged as high risk as of the current date
    pub async fn high_risk_policyholders(&self) -> Result<Vec<Policyholder>, ServiceError> {
        self.high_risk_policyholders_as_of(today()).await
    }

    /// Policyholders flagged as high risk, treating `today` as the current date
    ///
    /// Policyholder order is preserved.
    pub async fn high_risk_policyholders_as_of(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Policyholder>, ServiceError> {
        let policyholders = self.stores.policyholders.load().await?;
        let claims = self.stores.claims.load().await?;

        let flagged = high_risk(policyholders, &claims, today);
        debug!(flagged = flagged.len(), %today, "Computed high-risk policyholders");
        Ok(flagged)
    }

    /// Claim count and total amount per policy type
    ///
    /// Claims whose policyholder cannot be found are skipped. Policy types
    /// with no claims are absent from the map.
    pub async fn aggregate_by_policy_type(
        &self,
    ) -> Result<BTreeMap<PolicyType, PolicyTypeTotals>, ServiceError> {
        let policyholders = self.stores.policyholders.load().await?;
        let claims = self.stores.claims.load().await?;

        let totals = policy_type_totals(&policyholders, &claims);
        debug!(policy_types = totals.len(), "Aggregated claims by policy type");
        Ok(totals)
    }
}

/// Keeps the policyholders that meet either risk condition
///
/// A policyholder is flagged when more than [`RECENT_CLAIMS_THRESHOLD`] of
/// their claims were filed on or after `today - RECENT_WINDOW_DAYS`, or when
/// the sum of all their claim amounts exceeds [`EXPOSURE_RATIO_THRESHOLD`]
/// times their sum insured.
pub fn high_risk(
    policyholders: Vec<Policyholder>,
    claims: &[Claim],
    today: NaiveDate,
) -> Vec<Policyholder> {
    let window_start = trailing_window_start(today, RECENT_WINDOW_DAYS);

    let mut recent: HashMap<PolicyholderId, usize> = HashMap::new();
    let mut claimed: HashMap<PolicyholderId, Decimal> = HashMap::new();
    for claim in claims {
        if claim.date_filed >= window_start {
            *recent.entry(claim.policyholder_id).or_default() += 1;
        }
        *claimed.entry(claim.policyholder_id).or_default() += claim.amount;
    }

    policyholders
        .into_iter()
        .filter(|p| {
            let recent_claims = recent.get(&p.id).copied().unwrap_or(0);
            let total_claimed = claimed.get(&p.id).copied().unwrap_or(Decimal::ZERO);
            recent_claims > RECENT_CLAIMS_THRESHOLD
                || total_claimed > EXPOSURE_RATIO_THRESHOLD * p.sum_insured
        })
        .collect()
}

/// Joins claims to their policyholder's policy type and totals them
pub fn policy_type_totals(
    policyholders: &[Policyholder],
    claims: &[Claim],
) -> BTreeMap<PolicyType, PolicyTypeTotals> {
    let types: HashMap<PolicyholderId, PolicyType> =
        policyholders.iter().map(|p| (p.id, p.policy_type)).collect();

    let mut totals: BTreeMap<PolicyType, PolicyTypeTotals> = BTreeMap::new();
    for claim in claims {
        match types.get(&claim.policyholder_id) {
            Some(policy_type) => totals.entry(*policy_type).or_default().add(claim.amount),
            None => debug!(
                claim_id = %claim.id,
                policyholder_id = %claim.policyholder_id,
                "Skipping claim with unknown policyholder"
            ),
        }
    }
    totals
}
