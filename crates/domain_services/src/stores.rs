//! Record store wiring
//!
//! The services share one pair of collection slots. Creations run a full
//! load-modify-save cycle, so each collection carries a writer lock that
//! serializes those cycles within the process.

use std::sync::Arc;
use tokio::sync::Mutex;

use core_kernel::RecordStore;
use domain_claims::Claim;
use domain_policyholder::Policyholder;
use infra_store::{JsonFileStore, MemoryStore, StoreConfig};

/// Slot holding the policyholder collection
pub const POLICYHOLDERS_SLOT: &str = "policyholders";

/// Slot holding the claim collection
pub const CLAIMS_SLOT: &str = "claims";

/// The policyholder and claim collections used by every service
#[derive(Clone)]
pub struct RecordStores {
    pub policyholders: Arc<dyn RecordStore<Policyholder>>,
    pub claims: Arc<dyn RecordStore<Claim>>,
    pub(crate) policyholder_writes: Arc<Mutex<()>>,
    pub(crate) claim_writes: Arc<Mutex<()>>,
}

impl RecordStores {
    /// Wraps existing stores
    pub fn new(
        policyholders: Arc<dyn RecordStore<Policyholder>>,
        claims: Arc<dyn RecordStore<Claim>>,
    ) -> Self {
        Self {
            policyholders,
            claims,
            policyholder_writes: Arc::new(Mutex::new(())),
            claim_writes: Arc::new(Mutex::new(())),
        }
    }

    /// Stores backed by `policyholders.json` and `claims.json` in the data directory
    pub fn on_disk(config: &StoreConfig) -> Self {
        Self::new(
            Arc::new(JsonFileStore::<Policyholder>::open(config, POLICYHOLDERS_SLOT)),
            Arc::new(JsonFileStore::<Claim>::open(config, CLAIMS_SLOT)),
        )
    }

    /// Fresh, uninitialized in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Policyholder>::new(POLICYHOLDERS_SLOT)),
            Arc::new(MemoryStore::<Claim>::new(CLAIMS_SLOT)),
        )
    }
}

impl std::fmt::Debug for RecordStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStores")
            .field("policyholders", &self.policyholders.slot())
            .field("claims", &self.claims.slot())
            .finish()
    }
}
