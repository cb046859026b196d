//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for survey types that give more
//! meaningful failure messages than standard assertions.

use core_kernel::Money;
use domain_claims::{AssessmentTotals, Claim, EstimateLineItem};
use rust_decimal::Decimal;

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(money.is_negative(), "Expected negative money, got {}", money);
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts the derived amounts of one recomputed line item
pub fn assert_item_amounts(
    item: &EstimateLineItem,
    amount: Decimal,
    tax: Decimal,
    depreciation: Decimal,
    admissible: Decimal,
) {
    assert_eq!(item.amount, amount, "amount of {:?}", item.category);
    assert_eq!(item.tax, tax, "tax of {:?}", item.category);
    assert_eq!(
        item.depreciation_amount, depreciation,
        "depreciation of {:?}",
        item.category
    );
    assert_eq!(item.admissible, admissible, "admissible of {:?}", item.category);
}

/// Asserts that each item's admissible equals max(0, amount - depreciation) + tax
pub fn assert_items_consistent(items: &[EstimateLineItem]) {
    for (index, item) in items.iter().enumerate() {
        assert_eq!(
            item.admissible,
            (item.amount - item.depreciation_amount).max(Decimal::ZERO) + item.tax,
            "item {} is inconsistent: {:?}",
            index,
            item
        );
    }
}

/// Asserts that a claim's stored aggregates agree with its items
pub fn assert_claim_totals_consistent(claim: &Claim) {
    assert_items_consistent(claim.items());

    let admissible: Decimal = claim.items().iter().map(|i| i.admissible).sum();
    let depreciation: Decimal = claim.items().iter().map(|i| i.depreciation_amount).sum();
    assert_eq!(claim.assessment.total_admissible, admissible, "total admissible");
    assert_eq!(claim.assessment.depreciation_total, depreciation, "depreciation total");
}

/// Asserts all three assessment aggregates at once
pub fn assert_totals(totals: &AssessmentTotals, admissible: Decimal, depreciation: Decimal, net: Decimal) {
    assert_eq!(
        (totals.total_admissible, totals.depreciation_total, totals.net_assessed),
        (admissible, depreciation, net),
        "(total_admissible, depreciation_total, net_assessed)"
    );
}
