//! Test Data Builders
//!
//! Builder patterns for drafts. Tests specify only the fields they care about
//! and take defaults for the rest.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::PolicyholderId;
use domain_claims::{ClaimDraft, ClaimStatus};
use domain_policyholder::{PolicyholderDraft, PolicyType};

use crate::fixtures::DateFixtures;

/// Builder for policyholder drafts
pub struct PolicyholderDraftBuilder {
    name: String,
    policy_type: PolicyType,
    sum_insured: Decimal,
}

impl Default for PolicyholderDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyholderDraftBuilder {
    /// Creates a builder for a Health policyholder insured for 1000
    pub fn new() -> Self {
        Self {
            name: "Test Holder".to_string(),
            policy_type: PolicyType::Health,
            sum_insured: dec!(1000),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    pub fn with_sum_insured(mut self, sum_insured: Decimal) -> Self {
        self.sum_insured = sum_insured;
        self
    }

    pub fn build(self) -> PolicyholderDraft {
        PolicyholderDraft::new(self.name, self.policy_type, self.sum_insured)
    }
}

/// Builder for claim drafts
pub struct ClaimDraftBuilder {
    policyholder_id: PolicyholderId,
    date_filed: NaiveDate,
    amount: Decimal,
    status: ClaimStatus,
}

impl Default for ClaimDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimDraftBuilder {
    /// Creates a builder for a pending claim of 100 by policyholder 0,
    /// filed on the reference date
    pub fn new() -> Self {
        Self {
            policyholder_id: PolicyholderId::new(0),
            date_filed: DateFixtures::today(),
            amount: dec!(100),
            status: ClaimStatus::Pending,
        }
    }

    /// Sets the filing policyholder
    pub fn for_policyholder(mut self, id: PolicyholderId) -> Self {
        self.policyholder_id = id;
        self
    }

    pub fn filed_on(mut self, date: NaiveDate) -> Self {
        self.date_filed = date;
        self
    }

    /// Sets the filing date `days` before the reference date
    pub fn filed_days_ago(mut self, days: u64) -> Self {
        self.date_filed = DateFixtures::days_ago(days);
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> ClaimDraft {
        ClaimDraft::new(self.policyholder_id, self.date_filed, self.amount).with_status(self.status)
    }
}
