//! Claims domain errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid claim data: {0}")]
    InvalidData(String),

    #[error("date_filed cannot be in the future: {date_filed} is after {today}")]
    FutureDate { date_filed: NaiveDate, today: NaiveDate },

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),
}

impl From<validator::ValidationErrors> for ClaimError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClaimError::InvalidData(errors.to_string())
    }
}
