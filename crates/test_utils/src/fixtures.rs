//! Pre-built Test Fixtures
//!
//! Ready-to-use drafts, records and dates. Everything date-dependent is
//! anchored to [`DateFixtures::today`] so results do not depend on the clock.

use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

use core_kernel::PolicyholderId;
use domain_claims::{ClaimDraft, ClaimStatus};
use domain_policyholder::{Policyholder, PolicyholderDraft, PolicyType};

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// The pinned reference date (June 30, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    /// A date `days` before the reference date
    pub fn days_ago(days: u64) -> NaiveDate {
        Self::today().checked_sub_days(Days::new(days)).unwrap()
    }

    /// The day after the reference date
    pub fn tomorrow() -> NaiveDate {
        Self::today().checked_add_days(Days::new(1)).unwrap()
    }

    /// A date well outside any trailing window
    pub fn long_ago() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 1, 15).unwrap()
    }
}

/// Fixture for policyholder data
pub struct PolicyholderFixtures;

impl PolicyholderFixtures {
    /// Health policyholder insured for 1000
    pub fn alice_health() -> PolicyholderDraft {
        PolicyholderDraft::new("Alice Smith", PolicyType::Health, dec!(1000))
    }

    /// Vehicle policyholder insured for 5000
    pub fn bob_vehicle() -> PolicyholderDraft {
        PolicyholderDraft::new("Bob Jones", PolicyType::Vehicle, dec!(5000))
    }

    /// Life policyholder insured for 100000
    pub fn carol_life() -> PolicyholderDraft {
        PolicyholderDraft::new("Carol White", PolicyType::Life, dec!(100000))
    }

    /// A persisted policyholder with the given id
    pub fn record(id: u64, policy_type: PolicyType) -> Policyholder {
        PolicyholderDraft::new(format!("Holder {}", id), policy_type, dec!(10000))
            .into_policyholder(PolicyholderId::new(id))
    }
}

/// Fixture for claim data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A pending claim of 100 filed on the reference date
    pub fn pending_for(policyholder_id: PolicyholderId) -> ClaimDraft {
        ClaimDraft::new(policyholder_id, DateFixtures::today(), dec!(100))
    }

    /// An approved claim of 250 filed 30 days before the reference date
    pub fn approved_for(policyholder_id: PolicyholderId) -> ClaimDraft {
        ClaimDraft::new(policyholder_id, DateFixtures::days_ago(30), dec!(250))
            .with_status(ClaimStatus::Approved)
    }
}
