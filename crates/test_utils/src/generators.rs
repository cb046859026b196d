//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating survey test data.

use domain_claims::{DepreciationPolicy, EstimateLineItem, LineItemCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for line item categories, including unrecognised ones
pub fn category_strategy() -> impl Strategy<Value = LineItemCategory> {
    prop_oneof![
        Just(LineItemCategory::Part),
        Just(LineItemCategory::Paint),
        Just(LineItemCategory::Fibre),
        Just(LineItemCategory::Glass),
        Just(LineItemCategory::Labour),
        Just(LineItemCategory::Consumable),
        "[a-z]{3,8}".prop_map(|s| LineItemCategory::from(s.as_str())),
    ]
}

/// Strategy for non-negative amounts with up to two decimals
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for quantities from 0 to 20, in quarter steps
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=80i64).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Strategy for percentages from 0% to 100%
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=100u32).prop_map(Decimal::from)
}

/// Strategy for depreciation policies with whole-percent rates
pub fn policy_strategy() -> impl Strategy<Value = DepreciationPolicy> {
    (
        percentage_strategy(),
        percentage_strategy(),
        percentage_strategy(),
        percentage_strategy(),
        amount_strategy(),
    )
        .prop_map(|(parts, paint, glass, fibre, excess)| {
            DepreciationPolicy::new(parts, paint, glass, fibre, excess)
        })
}

/// Strategy for line items with inputs only
pub fn line_item_strategy() -> impl Strategy<Value = EstimateLineItem> {
    (
        category_strategy(),
        quantity_strategy(),
        amount_strategy(),
        percentage_strategy(),
    )
        .prop_map(|(category, qty, rate, tax)| EstimateLineItem::new(category, "", qty, rate, tax))
}

/// Strategy for a short estimate
pub fn line_items_strategy(max: usize) -> impl Strategy<Value = Vec<EstimateLineItem>> {
    proptest::collection::vec(line_item_strategy(), 0..=max)
}
