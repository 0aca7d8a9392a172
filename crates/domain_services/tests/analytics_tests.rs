//! Tests for claim frequency, risk flags and per-type aggregation

use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::PolicyholderId;
use domain_claims::{Claim, ClaimDraft};
use domain_policyholder::{Policyholder, PolicyType};
use domain_services::{
    AnalyticsService, ClaimFrequency, PolicyTypeTotals, RecordStores, RegistryService, CLAIMS_SLOT,
    POLICYHOLDERS_SLOT,
};
use infra_store::MemoryStore;
use test_utils::*;

struct Ledger {
    registry: RegistryService,
    analytics: AnalyticsService,
}

impl Ledger {
    fn new() -> Self {
        let stores = RecordStores::in_memory();
        Self {
            registry: RegistryService::new(stores.clone()),
            analytics: AnalyticsService::new(stores),
        }
    }

    async fn holder(&self, policy_type: PolicyType, sum_insured: rust_decimal::Decimal) -> PolicyholderId {
        self.registry
            .create_policyholder(
                PolicyholderDraftBuilder::new()
                    .with_policy_type(policy_type)
                    .with_sum_insured(sum_insured)
                    .build(),
            )
            .await
            .unwrap()
            .id
    }

    async fn claim(&self, draft: ClaimDraft) {
        self.registry
            .create_claim_as_of(draft, DateFixtures::today())
            .await
            .unwrap();
    }
}

// ============================================================================
// Claim frequency
// ============================================================================

#[tokio::test]
async fn test_claim_frequency_counts_only_that_holder() {
    let ledger = Ledger::new();
    let a = ledger.holder(PolicyType::Health, dec!(1000)).await;
    let b = ledger.holder(PolicyType::Vehicle, dec!(1000)).await;
    ledger.claim(ClaimDraftBuilder::new().for_policyholder(a).with_amount(dec!(100)).build()).await;
    ledger.claim(ClaimDraftBuilder::new().for_policyholder(a).with_amount(dec!(50)).build()).await;
    ledger.claim(ClaimDraftBuilder::new().for_policyholder(b).build()).await;

    let frequency = ledger.analytics.claim_frequency(a).await.unwrap();

    assert_eq!(frequency, ClaimFrequency { policyholder_id: a, claim_count: 2 });
}

#[tokio::test]
async fn test_claim_frequency_for_unknown_id_is_zero() {
    let ledger = Ledger::new();
    ledger.holder(PolicyType::Health, dec!(1000)).await;

    let frequency = ledger.analytics.claim_frequency(PolicyholderId::new(42)).await.unwrap();

    assert_eq!(frequency.claim_count, 0);
    assert_eq!(
        serde_json::to_value(frequency).unwrap(),
        serde_json::json!({"policyholder_id": 42, "claim_count": 0})
    );
}

// ============================================================================
// High-risk policyholders
// ============================================================================

mod high_risk {
    use super::*;

    #[tokio::test]
    async fn test_frequency_condition_alone_flags_holder() {
        let ledger = Ledger::new();
        let holder = ledger.holder(PolicyType::Health, dec!(100)).await;
        for _ in 0..4 {
            ledger
                .claim(ClaimDraftBuilder::new().for_policyholder(holder).with_amount(dec!(10)).build())
                .await;
        }

        let flagged = ledger
            .analytics
            .high_risk_policyholders_as_of(DateFixtures::today())
            .await
            .unwrap();

        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, holder);
    }

    #[tokio::test]
    async fn test_three_recent_claims_are_not_enough() {
        let ledger = Ledger::new();
        let holder = ledger.holder(PolicyType::Health, dec!(100)).await;
        for _ in 0..3 {
            ledger
                .claim(ClaimDraftBuilder::new().for_policyholder(holder).with_amount(dec!(10)).build())
                .await;
        }

        let flagged = ledger
            .analytics
            .high_risk_policyholders_as_of(DateFixtures::today())
            .await
            .unwrap();

        assert!(flagged.is_empty());
    }

    #[tokio::test]
    async fn test_old_claims_do_not_count_as_recent() {
        let ledger = Ledger::new();
        let holder = ledger.holder(PolicyType::Health, dec!(100000)).await;
        for _ in 0..5 {
            ledger
                .claim(ClaimDraftBuilder::new().for_policyholder(holder).filed_days_ago(366).build())
                .await;
        }

        let flagged = ledger
            .analytics
            .high_risk_policyholders_as_of(DateFixtures::today())
            .await
            .unwrap();

        assert!(flagged.is_empty());
    }

    #[tokio::test]
    async fn test_exposure_condition_counts_all_claims() {
        let ledger = Ledger::new();
        let holder = ledger.holder(PolicyType::Life, dec!(1000)).await;
        ledger
            .claim(
                ClaimDraftBuilder::new()
                    .for_policyholder(holder)
                    .filed_on(DateFixtures::long_ago())
                    .with_amount(dec!(801))
                    .build(),
            )
            .await;

        let flagged = ledger
            .analytics
            .high_risk_policyholders_as_of(DateFixtures::today())
            .await
            .unwrap();

        assert_eq!(flagged.len(), 1);
    }

    #[tokio::test]
    async fn test_flagged_holders_keep_collection_order() {
        let ledger = Ledger::new();
        let first = ledger.holder(PolicyType::Health, dec!(10)).await;
        let _quiet = ledger.holder(PolicyType::Vehicle, dec!(10)).await;
        let third = ledger.holder(PolicyType::Life, dec!(10)).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(third).with_amount(dec!(9)).build()).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(first).with_amount(dec!(9)).build()).await;

        let flagged = ledger
            .analytics
            .high_risk_policyholders_as_of(DateFixtures::today())
            .await
            .unwrap();

        let ids: Vec<PolicyholderId> = flagged.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[tokio::test]
    async fn test_holder_without_claims_is_never_flagged() {
        let ledger = Ledger::new();
        ledger.holder(PolicyType::Health, dec!(1)).await;

        assert!(ledger.analytics.high_risk_policyholders().await.unwrap().is_empty());
    }
}

// ============================================================================
// Aggregation by policy type
// ============================================================================

mod aggregation {
    use super::*;

    #[tokio::test]
    async fn test_life_claims_are_totalled() {
        let ledger = Ledger::new();
        let holder = ledger.holder(PolicyType::Life, dec!(10000)).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(holder).with_amount(dec!(20)).build()).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(holder).with_amount(dec!(30)).build()).await;

        let totals = ledger.analytics.aggregate_by_policy_type().await.unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&PolicyType::Life], PolicyTypeTotals { count: 2, total_amount: dec!(50) });
        assert_eq!(
            serde_json::to_value(&totals).unwrap(),
            serde_json::json!({"Life": {"count": 2, "total_amount": 50.0}})
        );
    }

    #[tokio::test]
    async fn test_types_are_kept_apart() {
        let ledger = Ledger::new();
        let health = ledger.holder(PolicyType::Health, dec!(10000)).await;
        let vehicle = ledger.holder(PolicyType::Vehicle, dec!(10000)).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(health).with_amount(dec!(5)).build()).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(vehicle).with_amount(dec!(7.5)).build()).await;
        ledger.claim(ClaimDraftBuilder::new().for_policyholder(vehicle).with_amount(dec!(2.5)).build()).await;

        let totals = ledger.analytics.aggregate_by_policy_type().await.unwrap();

        assert_eq!(totals[&PolicyType::Health].count, 1);
        assert_eq!(totals[&PolicyType::Vehicle].total_amount, dec!(10));
        assert!(!totals.contains_key(&PolicyType::Life));
    }

    #[tokio::test]
    async fn test_orphan_claims_are_skipped() {
        let holders: Arc<MemoryStore<Policyholder>> = Arc::new(MemoryStore::with_contents(
            POLICYHOLDERS_SLOT,
            r#"[{"id": 0, "name": "Dana", "policy_type": "Health", "sum_insured": 100.0}]"#,
        ));
        let claims: Arc<MemoryStore<Claim>> = Arc::new(MemoryStore::with_contents(
            CLAIMS_SLOT,
            r#"[
  {"id": 0, "policyholder_id": 0, "date_filed": "2024-01-01", "amount": 10.0, "status": "Pending"},
  {"id": 1, "policyholder_id": 9, "date_filed": "2024-01-02", "amount": 99.0, "status": "Pending"}
]"#,
        ));
        let analytics = AnalyticsService::new(RecordStores::new(holders, claims));

        let totals = analytics.aggregate_by_policy_type().await.unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&PolicyType::Health], PolicyTypeTotals { count: 1, total_amount: dec!(10) });
    }

    #[tokio::test]
    async fn test_stored_oversized_amounts_are_malformed() {
        let holders: Arc<MemoryStore<Policyholder>> = Arc::new(MemoryStore::with_contents(
            POLICYHOLDERS_SLOT,
            r#"[{"id": 0, "name": "Dana", "policy_type": "Health", "sum_insured": 100.0}]"#,
        ));
        let claims: Arc<MemoryStore<Claim>> = Arc::new(MemoryStore::with_contents(
            CLAIMS_SLOT,
            r#"[
  {"id": 0, "policyholder_id": 0, "date_filed": "2024-01-01", "amount": 5e28, "status": "Pending"},
  {"id": 1, "policyholder_id": 0, "date_filed": "2024-01-02", "amount": 5e28, "status": "Pending"}
]"#,
        ));
        let analytics = AnalyticsService::new(RecordStores::new(holders, claims));

        let aggregated = analytics.aggregate_by_policy_type().await.unwrap_err();
        let flagged = analytics.high_risk_policyholders_as_of(DateFixtures::today()).await.unwrap_err();

        assert!(aggregated.is_malformed_data());
        assert!(flagged.is_malformed_data());
    }

    #[tokio::test]
    async fn test_empty_ledger_has_no_totals() {
        let ledger = Ledger::new();
        assert!(ledger.analytics.aggregate_by_policy_type().await.unwrap().is_empty());
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_every_claim_is_counted_once(
            holders in prop::collection::vec(policyholder_draft_strategy(), 1..4),
            claims in prop::collection::vec(claim_draft_strategy(4), 0..16),
        ) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let (accepted, frequencies, totals) = runtime.block_on(async {
                let ledger = Ledger::new();
                for draft in holders.clone() {
                    ledger.registry.create_policyholder(draft).await.unwrap();
                }
                let mut accepted = 0usize;
                for draft in claims {
                    if ledger.registry.create_claim_as_of(draft, DateFixtures::today()).await.is_ok() {
                        accepted += 1;
                    }
                }
                let mut frequencies = 0usize;
                for id in 0..4u64 {
                    frequencies += ledger.analytics.claim_frequency(PolicyholderId::new(id)).await.unwrap().claim_count;
                }
                let totals = ledger.analytics.aggregate_by_policy_type().await.unwrap();
                (accepted, frequencies, totals)
            });

            prop_assert_eq!(frequencies, accepted);
            prop_assert_eq!(totals.values().map(|t| t.count).sum::<usize>(), accepted);
        }
    }
}
