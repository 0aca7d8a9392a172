//! Policyholder record and draft

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use core_kernel::{check_amount, PolicyholderId, Record};
use crate::error::PolicyholderError;

/// Line of business a policy belongs to
///
/// Persisted by label, so reordering the variants never changes stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Health,
    Vehicle,
    Life,
}

impl PolicyType {
    /// Every policy type, in declaration order
    pub const ALL: [PolicyType; 3] = [PolicyType::Health, PolicyType::Vehicle, PolicyType::Life];

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Health => "Health",
            PolicyType::Vehicle => "Vehicle",
            PolicyType::Life => "Life",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = PolicyholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PolicyholderError::UnknownPolicyType(s.to_string()))
    }
}

/// Field set of a policyholder before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PolicyholderDraft {
    /// Full name of the policyholder
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    /// One of Health, Vehicle, Life
    pub policy_type: PolicyType,
    /// Sum insured, must be positive
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub sum_insured: Decimal,
}

impl PolicyholderDraft {
    pub fn new(name: impl Into<String>, policy_type: PolicyType, sum_insured: Decimal) -> Self {
        Self {
            name: name.into(),
            policy_type,
            sum_insured,
        }
    }

    /// Checks the declared field constraints
    pub fn validate_fields(&self) -> Result<(), PolicyholderError> {
        self.validate()?;
        Ok(())
    }

    /// Builds the full record under the given id
    pub fn into_policyholder(self, id: PolicyholderId) -> Policyholder {
        Policyholder {
            id,
            name: self.name,
            policy_type: self.policy_type,
            sum_insured: self.sum_insured,
        }
    }
}

/// A persisted policyholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Policyholder {
    /// Unique identifier, assigned by the collection
    pub id: PolicyholderId,
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    pub policy_type: PolicyType,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub sum_insured: Decimal,
}

impl Record for Policyholder {
    const KIND: &'static str = "policyholder";

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
