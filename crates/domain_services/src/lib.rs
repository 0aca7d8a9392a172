//! Registry and Analytics Services
//!
//! This crate holds the operations of the claims ledger. Every operation
//! loads the collections it needs fresh from the record stores, works on them
//! in memory, and (for creations) writes the full collection back.
//!
//! - [`RegistryService`]: creates and lists policyholders and claims
//! - [`AnalyticsService`]: claim frequency, high-risk flags, per-type totals
//! - [`ReportingService`]: monthly counts, averages, largest claim, pending claims
//!
//! # Example
//!
//! ```rust,ignore
//! let stores = RecordStores::on_disk(&StoreConfig::new("data"));
//! let registry = RegistryService::new(stores.clone());
//! let holder = registry.create_policyholder(draft).await?;
//! let flagged = AnalyticsService::new(stores).high_risk_policyholders().await?;
//! ```

pub mod error;
pub mod stores;
pub mod registry;
pub mod analytics;
pub mod reporting;

pub use error::ServiceError;
pub use stores::{RecordStores, CLAIMS_SLOT, POLICYHOLDERS_SLOT};
pub use registry::RegistryService;
pub use analytics::{
    high_risk, policy_type_totals,
    AnalyticsService, ClaimFrequency, PolicyTypeTotals,
    EXPOSURE_RATIO_THRESHOLD, RECENT_CLAIMS_THRESHOLD, RECENT_WINDOW_DAYS,
};
pub use reporting::{largest_claim, HighestClaim, ReportingService};
