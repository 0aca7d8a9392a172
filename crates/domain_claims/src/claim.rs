//! Claim record and draft

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use core_kernel::{check_amount, today, ClaimId, PolicyholderId, Record};
use crate::error::ClaimError;

/// Claim status
///
/// Persisted by label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Filed, awaiting a decision
    #[default]
    Pending,
    /// Accepted for payment
    Approved,
    /// Declined
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

/// Field set of a claim before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClaimDraft {
    /// Policyholder filing the claim; must exist when the claim is created
    pub policyholder_id: PolicyholderId,
    /// Date the claim was filed (YYYY-MM-DD)
    pub date_filed: NaiveDate,
    /// Claimed amount, must be positive
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
    #[serde(default)]
    pub status: ClaimStatus,
}

impl ClaimDraft {
    /// Creates a pending claim draft
    pub fn new(policyholder_id: PolicyholderId, date_filed: NaiveDate, amount: Decimal) -> Self {
        Self {
            policyholder_id,
            date_filed,
            amount,
            status: ClaimStatus::Pending,
        }
    }

    /// Sets the initial status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Checks the field constraints against the current date
    pub fn validate_fields(&self) -> Result<(), ClaimError> {
        self.validate_as_of(today())
    }

    /// Checks the field constraints, treating `today` as the current date
    pub fn validate_as_of(&self, today: NaiveDate) -> Result<(), ClaimError> {
        self.validate()?;
        if self.date_filed > today {
            return Err(ClaimError::FutureDate {
                date_filed: self.date_filed,
                today,
            });
        }
        Ok(())
    }

    /// Builds the full record under the given id
    pub fn into_claim(self, id: ClaimId) -> Claim {
        Claim {
            id,
            policyholder_id: self.policyholder_id,
            date_filed: self.date_filed,
            amount: self.amount,
            status: self.status,
        }
    }
}

/// A persisted claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Claim {
    /// Unique identifier, assigned by the collection
    pub id: ClaimId,
    pub policyholder_id: PolicyholderId,
    pub date_filed: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
    #[serde(default)]
    pub status: ClaimStatus,
}

impl Claim {
    /// Checks whether the claim is awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Checks whether the claim was filed by the given policyholder
    pub fn is_filed_by(&self, policyholder_id: PolicyholderId) -> bool {
        self.policyholder_id == policyholder_id
    }
}

impl Record for Claim {
    const KIND: &'static str = "claim";

    fn check_shape(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    check_amount(value).map_err(|violation| {
        let mut error = ValidationError::new(violation.code());
        error.message = Some(violation.to_string().into());
        error
    })
}
