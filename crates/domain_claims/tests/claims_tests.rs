//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use domain_claims::{
    generate_report, recompute_assessment, recompute_item, Claim, ClaimFilter, ClaimStatus,
    Deductions, DepreciationPolicy, EstimateLineItem, LineItemCategory, LineItemPatch,
    StatusCounts, UploadRecord, VehicleSection,
};
use test_utils::{
    assert_item_amounts, assert_items_consistent, assert_money_zero, assert_totals, ItemFixtures,
    PolicyFixtures,
};

fn policy() -> DepreciationPolicy {
    PolicyFixtures::standard()
}

fn survey_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn item(category: LineItemCategory, qty: Decimal, rate: Decimal) -> EstimateLineItem {
    EstimateLineItem::new(category, "", qty, rate, dec!(18))
}

// ============================================================================
// Engine Tests
// ============================================================================

mod engine_tests {
    use super::*;

    #[test]
    fn test_unrecognised_category_matches_part() {
        let p = policy();
        let part = recompute_item(&item(LineItemCategory::Part, dec!(2), dec!(750)), &p);
        let misc = recompute_item(&item(LineItemCategory::from("misc"), dec!(2), dec!(750)), &p);

        assert_eq!(misc.amount, part.amount);
        assert_eq!(misc.tax, part.tax);
        assert_eq!(misc.depreciation_amount, part.depreciation_amount);
        assert_eq!(misc.admissible, part.admissible);
    }

    #[test]
    fn test_recompute_item_is_idempotent() {
        let p = policy();
        let once = recompute_item(&item(LineItemCategory::Paint, dec!(3), dec!(1234.56)), &p);
        let twice = recompute_item(&once, &p);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompute_assessment_is_pure() {
        let p = policy();
        let items: Vec<_> = [
            ItemFixtures::part_1000(),
            ItemFixtures::glass_8000(),
            item(LineItemCategory::Labour, dec!(4), dec!(350)),
        ]
        .iter()
        .map(|it| recompute_item(it, &p))
        .collect();
        let deductions = Deductions::new(dec!(100), dec!(1000), dec!(250), dec!(75));

        let first = recompute_assessment(&items, &p, &deductions);
        let second = recompute_assessment(&items, &p, &deductions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_changing_one_item_changes_only_its_contribution() {
        let p = policy();
        let mut items: Vec<_> = [
            item(LineItemCategory::Part, dec!(1), dec!(1000)),
            item(LineItemCategory::Paint, dec!(1), dec!(2000)),
        ]
        .iter()
        .map(|it| recompute_item(it, &p))
        .collect();
        let deductions = Deductions::default();
        let before = recompute_assessment(&items, &p, &deductions);

        let old_first = items[0].clone();
        items[0].quantity = dec!(3);
        items[0] = recompute_item(&items[0], &p);
        let after = recompute_assessment(&items, &p, &deductions);

        assert_eq!(
            after.total_admissible - before.total_admissible,
            items[0].admissible - old_first.admissible
        );
        assert_eq!(
            after.depreciation_total - before.depreciation_total,
            items[0].depreciation_amount - old_first.depreciation_amount
        );
    }

    #[test]
    fn test_documented_negative_net() {
        let p = policy();
        let items = vec![recompute_item(&ItemFixtures::part_1000(), &p)];
        assert_item_amounts(&items[0], dec!(1000), dec!(180), dec!(300), dec!(880));

        let totals = recompute_assessment(&items, &p, &Deductions::new(dec!(500), dec!(1000), dec!(0), dec!(0)));
        assert_totals(&totals, dec!(880), dec!(300), dec!(-920));
    }

    #[test]
    fn test_policy_change_is_picked_up_on_recompute() {
        let mut claim = Claim::new(survey_date(), &policy());
        let index = claim.add_item(&policy());
        let patch: LineItemPatch = serde_json::from_value(json!({"rate": 1000})).unwrap();
        claim.update_item(index, &patch, &policy()).unwrap();
        assert_eq!(claim.items()[0].admissible, dec!(880));

        claim.recompute(&PolicyFixtures::harsh_parts());
        assert_eq!(claim.items()[0].admissible, dec!(680));
        assert_eq!(claim.assessment.depreciation_total, dec!(500));
    }
}

// ============================================================================
// Claim Item Tests
// ============================================================================

mod claim_item_tests {
    use super::*;

    fn claim_with_items() -> Claim {
        let p = policy();
        let mut claim = Claim::new(survey_date(), &p);
        claim.estimate.items = vec![
            item(LineItemCategory::Part, dec!(1), dec!(1000)),
            item(LineItemCategory::Labour, dec!(1), dec!(1000)),
        ];
        claim.recompute(&p);
        claim
    }

    #[test]
    fn test_add_item_appends_one_default_item() {
        let mut claim = claim_with_items();
        let before = claim.items().to_vec();

        let index = claim.add_item(&policy());

        assert_eq!(index, 2);
        assert_eq!(claim.items().len(), 3);
        assert_eq!(&claim.items()[..2], before.as_slice());
        let added = &claim.items()[2];
        assert_eq!(added.category, LineItemCategory::Part);
        assert_eq!(added.quantity, dec!(1));
        assert_eq!(added.unit_rate, dec!(0));
        assert_eq!(added.tax_percent, dec!(18));
        assert_eq!(added.amount, dec!(0));
        assert_eq!(added.tax, dec!(0));
        assert_eq!(added.admissible, dec!(0));
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut claim = claim_with_items();
        let before = claim.clone();

        assert!(claim.remove_item(2, &policy()).is_none());
        assert!(claim.remove_item(usize::MAX, &policy()).is_none());

        assert_eq!(claim, before);
    }

    #[test]
    fn test_remove_item_recomputes() {
        let mut claim = claim_with_items();
        assert_eq!(claim.assessment.total_admissible, dec!(2060));

        let removed = claim.remove_item(0, &policy()).unwrap();

        assert_eq!(removed.category, LineItemCategory::Part);
        assert_eq!(claim.items().len(), 1);
        assert_eq!(claim.assessment.total_admissible, dec!(1180));
        assert_eq!(claim.assessment.depreciation_total, dec!(0));
    }

    #[test]
    fn test_update_unknown_item_fails() {
        let mut claim = claim_with_items();
        let err = claim.update_item(5, &LineItemPatch::default(), &policy()).unwrap_err();
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn test_clear_items_resets_aggregates() {
        let mut claim = claim_with_items();
        claim.clear_items(&policy());
        assert!(claim.items().is_empty());
        assert_eq!(claim.assessment.total_admissible, dec!(0));
        assert_eq!(claim.assessment.net_assessed, dec!(-1000));
    }

    #[test]
    fn test_uploads() {
        let mut claim = claim_with_items();
        claim.add_upload(UploadRecord::new("rc.pdf", 20480, "application/pdf"));
        claim.add_upload(UploadRecord::new("front.jpg", 1_048_576, "image/jpeg"));
        assert!(claim.remove_upload(9).is_none());
        assert_eq!(claim.remove_upload(0).unwrap().name, "rc.pdf");
        assert_eq!(claim.uploads.len(), 1);
    }
}

// ============================================================================
// Document Round-trip Tests
// ============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_aggregates() {
        let p = policy();
        let mut claim = Claim::new(survey_date(), &p);
        claim.policy.claim_no = "CLM-88".to_string();
        claim.estimate.items = vec![
            item(LineItemCategory::Part, dec!(2), dec!(1499.99)),
            item(LineItemCategory::Paint, dec!(1), dec!(3200)),
            item(LineItemCategory::from("misc"), dec!(1), dec!(99.5)),
        ];
        claim.assessment.betterment = dec!(150);
        claim.assessment.salvage = dec!(400);
        let totals = claim.recompute(&p);

        let text = serde_json::to_string(&claim).unwrap();
        let mut back: Claim = serde_json::from_str(&text).unwrap();
        assert_eq!(back, claim);

        assert_eq!(back.recompute(&p), totals);
    }

    #[test]
    fn test_reads_browser_document() {
        let doc = json!({
            "id": "Cx8k2m1q",
            "status": "Report Pending",
            "createdAt": "2024-02-10",
            "policy": {"refNo": "R-1", "claimNo": "CL-9", "insurer": "Tata AIG", "estAmount": "45000"},
            "vehicle": {"vehReg": "MH12AB1234", "year": "2019", "odometer": 45210},
            "driver": {},
            "loss": {"lossDate": "2024-02-01"},
            "estimate": {"items": [
                {"type": "part", "desc": "Bumper", "qty": 1, "rate": "1000", "taxPct": 18, "amount": 0, "tax": 0, "admissible": 0},
                {"type": "labour", "desc": "Fitting", "qty": "x", "rate": 500, "taxPct": 18}
            ]},
            "assessment": {"depMode": "irda", "betterment": "", "excess": 1000, "salvage": 0, "nonAdmissible": 0},
            "reinspections": [{"date": "2024-02-20", "reason": "", "findings": ""}],
            "uploads": [{"name": "rc.pdf", "size": 2048, "type": "application/pdf"}],
            "comments": {}
        });
        let mut claim: Claim = serde_json::from_value(doc).unwrap();
        assert_eq!(claim.status, ClaimStatus::ReportPending);
        assert_eq!(claim.vehicle.year, 2019);
        assert_eq!(claim.policy.est_amount, dec!(45000));
        assert_eq!(claim.items()[1].quantity, dec!(0));

        claim.recompute(&policy());
        assert_eq!(claim.assessment.total_admissible, dec!(880));
        assert_eq!(claim.assessment.net_assessed, dec!(-420));
    }

    #[test]
    fn test_malformed_fields_read_as_defaults() {
        let doc = json!({
            "id": "Cbad0001",
            "createdAt": "",
            "policy": {"insurer": null, "refNo": 12},
            "vehicle": null,
            "driver": "n/a",
            "estimate": {"workshop": null, "items": [{"type": "part", "qty": 1, "rate": 1000, "taxPct": 18}, 5]},
            "assessment": [],
            "reinspections": [{"date": "", "reason": null}, "junk"],
            "uploads": {"name": "x"},
            "comments": null
        });
        let mut claim: Claim = serde_json::from_value(doc).unwrap();
        assert_eq!(claim.created_at, None);
        assert_eq!(claim.policy.insurer, "");
        assert_eq!(claim.policy.ref_no, "12");
        assert_eq!(claim.vehicle, VehicleSection::default());
        assert_eq!(claim.estimate.workshop, "");
        assert_eq!(claim.items().len(), 1);
        assert_eq!(claim.assessment.excess, None);
        assert_eq!(claim.reinspections.len(), 1);
        assert_eq!(claim.reinspections[0].date, None);
        assert!(claim.uploads.is_empty());
        assert!(claim.comments.is_empty());

        claim.recompute(&policy());
        assert_eq!(claim.assessment.total_admissible, dec!(880));

        let back = serde_json::to_value(&claim).unwrap();
        assert!(back.get("createdAt").is_none());
    }

    #[test]
    fn test_report_excess_matches_the_one_deducted() {
        let doc = json!({
            "id": "Cnoexcs1",
            "estimate": {"items": [{"type": "part", "qty": 1, "rate": 10000, "taxPct": 18}]},
            "assessment": {"betterment": 200, "salvage": 300, "nonAdmissible": 50}
        });
        let mut claim: Claim = serde_json::from_value(doc).unwrap();
        assert_eq!(claim.assessment.excess, None);

        claim.recompute(&policy());
        assert_eq!(claim.assessment.excess, Some(dec!(1000)));

        let report = generate_report(&claim);
        assert_eq!(report.excess.amount(), dec!(1000));
        let reconciled = report.total_admissible.amount()
            - report.depreciation.amount()
            - report.betterment.amount()
            - report.excess.amount()
            - report.salvage.amount()
            - report.non_admissible.amount();
        assert_eq!(reconciled, report.net_assessed.amount());
    }
}

// ============================================================================
// Dashboard Tests
// ============================================================================

mod dashboard_tests {
    use super::*;

    fn claim(status: ClaimStatus, insurer: &str, reg: &str, claim_no: &str) -> Claim {
        let mut c = Claim::new(survey_date(), &policy());
        c.status = status;
        c.policy.insurer = insurer.to_string();
        c.policy.claim_no = claim_no.to_string();
        c.vehicle.veh_reg = reg.to_string();
        c
    }

    fn claims() -> Vec<Claim> {
        vec![
            claim(ClaimStatus::Pending, "HDFC ERGO", "MH12AB1234", "CL-100"),
            claim(ClaimStatus::Generated, "Tata AIG", "KA01XY9999", "CL-200"),
            claim(ClaimStatus::Pending, "Tata AIG", "MH14ZZ0001", "CL-300"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let all = claims();
        let kept = ClaimFilter::default().apply(&all);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].policy.claim_no, "CL-100");
    }

    #[test]
    fn test_filters_combine() {
        let all = claims();
        let filter = ClaimFilter {
            status: Some(ClaimStatus::Pending),
            insurer: Some("  tata ".to_string()),
            vehicle: Some("mh14".to_string()),
            text: None,
        };
        let kept = filter.apply(&all);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].policy.claim_no, "CL-300");
    }

    #[test]
    fn test_text_filter_searches_numbers() {
        let all = claims();
        let filter = ClaimFilter {
            text: Some("cl-2".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&all).len(), 1);
        assert_eq!(ClaimFilter::by_status(ClaimStatus::Overdue).apply(&all).len(), 0);
    }

    #[test]
    fn test_status_counts() {
        let all = claims();
        let counts = StatusCounts::tally(&all);
        assert_eq!(counts.get(ClaimStatus::Pending), 2);
        assert_eq!(counts.get(ClaimStatus::Generated), 1);
        assert_eq!(counts.get(ClaimStatus::Overdue), 0);
        assert_eq!(counts.total(), 3);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["Work In Progress"], 0);
        assert_eq!(json["Pending"], 2);
    }

    #[test]
    fn test_report_without_depreciation() {
        let p = PolicyFixtures::no_depreciation();
        let mut c = Claim::new(survey_date(), &p);
        c.estimate.items = vec![ItemFixtures::paint_1000()];
        c.recompute(&p);

        let report = generate_report(&c);
        assert_money_zero(&report.depreciation);
        assert_money_zero(&report.excess);
        assert_eq!(report.net_assessed.amount(), dec!(1180));
    }

    #[test]
    fn test_generate_then_mark() {
        let mut c = claim(ClaimStatus::WorkInProgress, "New India", "DL3C0001", "CL-1");
        c.recompute(&policy());
        let report = generate_report(&c);
        assert_eq!(c.status, ClaimStatus::WorkInProgress);
        c.mark_generated();
        assert_eq!(c.status, ClaimStatus::Generated);
        assert_eq!(report.claim_no, "CL-1");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{line_item_strategy, line_items_strategy, policy_strategy};

    proptest! {
        #[test]
        fn admissible_never_below_tax(it in line_item_strategy()) {
            let out = recompute_item(&it, &policy());
            prop_assert!(out.admissible >= out.tax);
        }

        #[test]
        fn zero_quantity_means_zero_amounts(mut it in line_item_strategy()) {
            it.quantity = Decimal::ZERO;
            let out = recompute_item(&it, &policy());
            prop_assert_eq!(out.amount, Decimal::ZERO);
            prop_assert_eq!(out.tax, Decimal::ZERO);
            prop_assert_eq!(out.admissible, Decimal::ZERO);
        }

        #[test]
        fn totals_equal_sum_of_items(items in line_items_strategy(12)) {
            let p = policy();
            let items: Vec<_> = items.iter().map(|it| recompute_item(it, &p)).collect();
            let totals = recompute_assessment(&items, &p, &Deductions::default());

            let adm: Decimal = items.iter().map(|it| it.admissible).sum();
            let dep: Decimal = items.iter().map(|it| it.depreciation_amount).sum();
            prop_assert_eq!(totals.total_admissible, adm);
            prop_assert_eq!(totals.depreciation_total, dep);
            prop_assert_eq!(totals.net_assessed, adm - dep);
        }

        #[test]
        fn items_consistent_under_any_policy(items in line_items_strategy(8), p in policy_strategy()) {
            let mut claim = Claim::new(survey_date(), &p);
            claim.estimate.items = items;
            claim.recompute(&p);
            assert_items_consistent(claim.items());
            prop_assert_eq!(claim.assessment.excess, Some(p.default_excess));
        }
    }
}
