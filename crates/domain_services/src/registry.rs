//! Policyholder and claim registry
//!
//! Creations validate the draft, load the owning collection, assign the next
//! id and write the whole collection back. Nothing is ever updated or removed.

use chrono::NaiveDate;
use tracing::{error, info, warn};

use core_kernel::{next_in_sequence, today, ClaimId, PolicyholderId};
use domain_claims::{Claim, ClaimDraft};
use domain_policyholder::{Policyholder, PolicyholderDraft};

use crate::error::ServiceError;
use crate::stores::RecordStores;

/// Creates and lists policyholders and claims
#[derive(Debug, Clone)]
pub struct RegistryService {
    stores: RecordStores,
}

impl RegistryService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    /// Registers a new policyholder
    ///
    /// The id is one more than the largest id in the collection, or 0 for the
    /// first policyholder.
    ///
    /// # Errors
    ///
    /// * `ServiceError::Validation` if the draft breaks a field constraint
    /// * `ServiceError::IdsExhausted` if a stored id is already `u64::MAX`
    /// * `ServiceError::Store` if the collection cannot be read or written
    pub async fn create_policyholder(
        &self,
        draft: PolicyholderDraft,
    ) -> Result<Policyholder, ServiceError> {
        draft.validate_fields().inspect_err(|e| {
            warn!(error = %e, "Rejected policyholder draft");
        })?;

        let _writer = self.stores.policyholder_writes.lock().await;
        let mut policyholders = self.stores.policyholders.load().await?;

        let id: PolicyholderId = next_in_sequence(policyholders.iter().map(|p| p.id))
            .ok_or_else(|| exhausted(PolicyholderId::label()))?;
        let policyholder = draft.into_policyholder(id);
        policyholders.push(policyholder.clone());
        self.stores.policyholders.save(&policyholders).await?;

        info!(
            policyholder_id = %policyholder.id,
            policy_type = %policyholder.policy_type,
            "Created policyholder"
        );
        Ok(policyholder)
    }

    /// Returns every policyholder in insertion order
    pub async fn list_policyholders(&self) -> Result<Vec<Policyholder>, ServiceError> {
        Ok(self.stores.policyholders.load().await?)
    }

    /// Files a new claim, checking the filing date against the current date
    pub async fn create_claim(&self, draft: ClaimDraft) -> Result<Claim, ServiceError> {
        self.create_claim_as_of(draft, today()).await
    }

    /// Files a new claim, treating `today` as the current date
    ///
    /// # Errors
    ///
    /// * `ServiceError::Validation` if the amount is not positive or the
    ///   filing date is after `today`
    /// * `ServiceError::ReferentialIntegrity` if no policyholder has the
    ///   draft's `policyholder_id`; the claims collection is left untouched
    /// * `ServiceError::IdsExhausted` if a stored claim id is already `u64::MAX`
    /// * `ServiceError::Store` if a collection cannot be read or written
    pub async fn create_claim_as_of(
        &self,
        draft: ClaimDraft,
        today: NaiveDate,
    ) -> Result<Claim, ServiceError> {
        draft.validate_as_of(today).inspect_err(|e| {
            warn!(error = %e, "Rejected claim draft");
        })?;

        let _writer = self.stores.claim_writes.lock().await;

        let policyholders = self.stores.policyholders.load().await?;
        if !policyholders.iter().any(|p| p.id == draft.policyholder_id) {
            warn!(policyholder_id = %draft.policyholder_id, "Claim references unknown policyholder");
            return Err(ServiceError::ReferentialIntegrity(draft.policyholder_id));
        }

        let mut claims = self.stores.claims.load().await?;
        let id: ClaimId = next_in_sequence(claims.iter().map(|c| c.id))
            .ok_or_else(|| exhausted(ClaimId::label()))?;
        let claim = draft.into_claim(id);
        claims.push(claim.clone());
        self.stores.claims.save(&claims).await?;

        info!(
            claim_id = %claim.id,
            policyholder_id = %claim.policyholder_id,
            amount = %claim.amount,
            status = %claim.status,
            "Created claim"
        );
        Ok(claim)
    }

    /// Returns every claim in insertion order
    pub async fn list_claims(&self) -> Result<Vec<Claim>, ServiceError> {
        Ok(self.stores.claims.load().await?)
    }
}

fn exhausted(kind: &'static str) -> ServiceError {
    error!(kind, "Identifier sequence exhausted");
    ServiceError::IdsExhausted(kind)
}
