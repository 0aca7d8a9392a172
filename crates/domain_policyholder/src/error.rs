//! Policyholder domain errors

use thiserror::Error;

/// Errors that can occur in the policyholder domain
#[derive(Debug, Error)]
pub enum PolicyholderError {
    /// A field failed its declared constraint
    #[error("Invalid policyholder data: {0}")]
    InvalidData(String),

    /// The policy type label is not one of the known types
    #[error("Unknown policy type: {0}")]
    UnknownPolicyType(String),
}

impl PolicyholderError {
    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        PolicyholderError::InvalidData(message.into())
    }
}

impl From<validator::ValidationErrors> for PolicyholderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PolicyholderError::InvalidData(errors.to_string())
    }
}
