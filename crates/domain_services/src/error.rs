//! Service errors

use thiserror::Error;

use core_kernel::{PolicyholderId, StoreError};
use domain_claims::ClaimError;
use domain_policyholder::PolicyholderError;

/// Errors returned by registry and analytics operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A draft failed its field constraints
    #[error("Validation error: {0}")]
    Validation(String),

    /// A claim references a policyholder that does not exist
    #[error("No policyholder with id {0}")]
    ReferentialIntegrity(PolicyholderId),

    /// The collection already holds the largest representable id
    #[error("No {0} id left to assign")]
    IdsExhausted(&'static str),

    /// Loading or saving a collection failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Returns true if the caller supplied bad input
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::ReferentialIntegrity(_)
        )
    }

    /// Returns true if persisted data could not be read back
    pub fn is_malformed_data(&self) -> bool {
        matches!(self, ServiceError::Store(e) if e.is_malformed())
    }
}

impl From<PolicyholderError> for ServiceError {
    fn from(error: PolicyholderError) -> Self {
        ServiceError::Validation(error.to_string())
    }
}

impl From<ClaimError> for ServiceError {
    fn from(error: ClaimError) -> Self {
        ServiceError::Validation(error.to_string())
    }
}
