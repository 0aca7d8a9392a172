//! Policyholder DTOs

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_policyholder::{PolicyholderDraft, PolicyType};

#[derive(Debug, Deserialize)]
pub struct CreatePolicyholderRequest {
    pub name: String,
    pub policy_type: PolicyType,
    #[serde(with = "rust_decimal::serde::float")]
    pub sum_insured: Decimal,
}

impl From<CreatePolicyholderRequest> for PolicyholderDraft {
    fn from(request: CreatePolicyholderRequest) -> Self {
        PolicyholderDraft::new(request.name, request.policy_type, request.sum_insured)
    }
}
