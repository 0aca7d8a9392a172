//! Property-Based Test Generators
//!
//! Proptest strategies that produce data satisfying the domain invariants.
//! Amounts are multiples of 0.25 so they survive the float round trip of the
//! persisted form exactly.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::PolicyholderId;
use domain_claims::{ClaimDraft, ClaimStatus};
use domain_policyholder::{PolicyholderDraft, PolicyType};

use crate::fixtures::DateFixtures;

/// Strategy for policy types
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Health),
        Just(PolicyType::Vehicle),
        Just(PolicyType::Life),
    ]
}

/// Strategy for claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for names within the accepted length range
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{1,99}"
}

/// Strategy for positive amounts in quarter units
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..40_000_000i64).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Strategy for filing dates up to ten years before the reference date
pub fn past_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650u64).prop_map(|days| {
        DateFixtures::today()
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN)
    })
}

/// Strategy for valid policyholder drafts
pub fn policyholder_draft_strategy() -> impl Strategy<Value = PolicyholderDraft> {
    (valid_name_strategy(), policy_type_strategy(), positive_amount_strategy())
        .prop_map(|(name, policy_type, sum_insured)| PolicyholderDraft::new(name, policy_type, sum_insured))
}

/// Strategy for valid claim drafts against policyholder ids below `holders`
pub fn claim_draft_strategy(holders: u64) -> impl Strategy<Value = ClaimDraft> {
    (0..holders.max(1), past_date_strategy(), positive_amount_strategy(), claim_status_strategy())
        .prop_map(|(holder, date_filed, amount, status)| {
            ClaimDraft::new(PolicyholderId::new(holder), date_filed, amount).with_status(status)
        })
}
