//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::PolicyholderId;
use domain_claims::{ClaimDraft, ClaimStatus};

#[derive(Debug, Deserialize)]
pub struct CreateClaimRequest {
    pub policyholder_id: PolicyholderId,
    pub date_filed: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Defaults to Pending when omitted
    #[serde(default)]
    pub status: ClaimStatus,
}

impl From<CreateClaimRequest> for ClaimDraft {
    fn from(request: CreateClaimRequest) -> Self {
        ClaimDraft::new(request.policyholder_id, request.date_filed, request.amount)
            .with_status(request.status)
    }
}

#[derive(Debug, Deserialize)]
pub struct FrequencyQuery {
    pub policyholder_id: PolicyholderId,
}
