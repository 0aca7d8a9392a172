//! Comprehensive tests for domain_claims

use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

use core_kernel::{today, ClaimId, PolicyholderId, Record, MAX_AMOUNT};
use domain_claims::{Claim, ClaimDraft, ClaimError, ClaimStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Draft Validation Tests
// ============================================================================

mod draft_validation {
    use super::*;

    #[test]
    fn test_claim_filed_today_is_valid() {
        let draft = ClaimDraft::new(PolicyholderId::new(0), today(), dec!(500));
        assert!(draft.validate_fields().is_ok());
    }

    #[test]
    fn test_claim_filed_in_past_is_valid() {
        let draft = ClaimDraft::new(PolicyholderId::new(0), date(2020, 2, 29), dec!(1));
        assert!(draft.validate_as_of(date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_future_date_is_rejected() {
        let reference = date(2024, 6, 1);
        let draft = ClaimDraft::new(PolicyholderId::new(0), date(2024, 6, 2), dec!(10));

        let error = draft.validate_as_of(reference).unwrap_err();
        assert!(matches!(
            error,
            ClaimError::FutureDate { date_filed, today: as_of } if date_filed == date(2024, 6, 2) && as_of == reference
        ));
        assert!(error.to_string().contains("future"));
    }

    #[test]
    fn test_tomorrow_is_rejected_against_real_clock() {
        let tomorrow = today() + Days::new(1);
        let draft = ClaimDraft::new(PolicyholderId::new(0), tomorrow, dec!(10));
        assert!(draft.validate_fields().is_err());
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let draft = ClaimDraft::new(PolicyholderId::new(0), date(2024, 1, 1), dec!(0));
        let error = draft.validate_as_of(date(2024, 1, 1)).unwrap_err();

        assert!(matches!(error, ClaimError::InvalidData(_)));
        assert!(error.to_string().contains("amount"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let draft = ClaimDraft::new(PolicyholderId::new(0), date(2024, 1, 1), dec!(-0.01));
        assert!(draft.validate_as_of(date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_amount_at_maximum_is_valid() {
        let draft = ClaimDraft::new(PolicyholderId::new(0), date(2024, 1, 1), MAX_AMOUNT);
        assert!(draft.validate_as_of(date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_amount_above_maximum_is_rejected() {
        // decodes fine, but two of these would overflow any running total
        let draft: ClaimDraft = serde_json::from_str(
            r#"{"policyholder_id": 0, "date_filed": "2024-01-01", "amount": 5e28}"#,
        )
        .unwrap();
        let error = draft.validate_as_of(date(2024, 1, 1)).unwrap_err();

        assert!(matches!(error, ClaimError::InvalidData(_)));
        assert!(error.to_string().contains("amount"));
    }
}

// ============================================================================
// Claim Record Tests
// ============================================================================

mod claim_record {
    use super::*;

    #[test]
    fn test_draft_defaults_to_pending() {
        let draft = ClaimDraft::new(PolicyholderId::new(3), date(2024, 1, 1), dec!(10));
        assert_eq!(draft.status, ClaimStatus::Pending);
    }

    #[test]
    fn test_into_claim_keeps_fields() {
        let claim = ClaimDraft::new(PolicyholderId::new(3), date(2024, 1, 1), dec!(10))
            .with_status(ClaimStatus::Approved)
            .into_claim(ClaimId::new(9));

        assert_eq!(claim.id, ClaimId::new(9));
        assert_eq!(claim.policyholder_id, PolicyholderId::new(3));
        assert_eq!(claim.date_filed, date(2024, 1, 1));
        assert_eq!(claim.amount, dec!(10));
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert!(!claim.is_pending());
        assert!(claim.is_filed_by(PolicyholderId::new(3)));
        assert!(!claim.is_filed_by(PolicyholderId::new(4)));
    }

    #[test]
    fn test_stored_future_date_passes_shape_check() {
        // the future-date rule applies at creation only
        let claim = ClaimDraft::new(PolicyholderId::new(0), today() + Days::new(30), dec!(10))
            .into_claim(ClaimId::new(0));
        assert!(claim.check_shape().is_ok());
    }

    #[test]
    fn test_stored_non_positive_amount_fails_shape_check() {
        let mut claim = ClaimDraft::new(PolicyholderId::new(0), date(2024, 1, 1), dec!(10))
            .into_claim(ClaimId::new(0));
        claim.amount = dec!(0);
        assert!(claim.check_shape().is_err());
    }

    #[test]
    fn test_stored_oversized_amount_fails_shape_check() {
        let mut claim = ClaimDraft::new(PolicyholderId::new(0), date(2024, 1, 1), dec!(10))
            .into_claim(ClaimId::new(0));
        claim.amount = MAX_AMOUNT + dec!(1);
        assert!(claim.check_shape().is_err());
    }
}

// ============================================================================
// Status Tests
// ============================================================================

mod status {
    use super::*;

    #[test]
    fn test_status_labels() {
        for status in ClaimStatus::ALL {
            assert_eq!(status.to_string().parse::<ClaimStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_label() {
        let error = "Closed".parse::<ClaimStatus>().unwrap_err();
        assert!(matches!(error, ClaimError::UnknownStatus(label) if label == "Closed"));
    }

    #[test]
    fn test_default_status() {
        assert_eq!(ClaimStatus::default(), ClaimStatus::Pending);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization {
    use super::*;

    #[test]
    fn test_claim_layout() {
        let claim = ClaimDraft::new(PolicyholderId::new(1), date(2024, 3, 5), dec!(250.5))
            .into_claim(ClaimId::new(7));
        let value = serde_json::to_value(&claim).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["policyholder_id"], 1);
        assert_eq!(value["date_filed"], "2024-03-05");
        assert_eq!(value["amount"], 250.5);
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn test_draft_without_status_decodes_as_pending() {
        let draft: ClaimDraft = serde_json::from_str(
            r#"{"policyholder_id": 0, "date_filed": "2024-01-15", "amount": 100.0}"#,
        )
        .unwrap();
        assert_eq!(draft.status, ClaimStatus::Pending);
        assert_eq!(draft.amount, dec!(100));
    }

    #[test]
    fn test_claim_round_trip() {
        let claim = ClaimDraft::new(PolicyholderId::new(2), date(2023, 12, 31), dec!(1234.75))
            .with_status(ClaimStatus::Rejected)
            .into_claim(ClaimId::new(11));

        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claim);
    }

    #[test]
    fn test_invalid_date_fails_to_decode() {
        let result = serde_json::from_str::<Claim>(
            r#"{"id": 0, "policyholder_id": 0, "date_filed": "2024-02-30", "amount": 1.0, "status": "Pending"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_policyholder_id_fails_to_decode() {
        let result = serde_json::from_str::<ClaimDraft>(
            r#"{"policyholder_id": -1, "date_filed": "2024-01-01", "amount": 1.0}"#,
        );
        assert!(result.is_err());
    }
}
