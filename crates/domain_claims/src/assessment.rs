//! Assessment engine
//!
//! Per-item depreciation and admissible amounts, and the claim-level net
//! assessed value after deductions. Both computations are pure: the same
//! inputs always give the same outputs, and aggregates are rebuilt from the
//! full item list every time rather than adjusted incrementally.
//!
//! Arithmetic saturates at the `Decimal` range instead of panicking, so
//! absurd inputs give absurd but finite results.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use core_kernel::numeric::{lenient_decimal, lenient_optional_decimal};

use crate::depreciation::{depreciation_rate_for, DepreciationPolicy};
use crate::estimate::EstimateLineItem;

/// How depreciation is to be applied.
///
/// Recorded on the claim for the surveyor's reference only; the computation
/// is the same for every mode. Modes other than `irda` keep their stored
/// spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DepreciationMode {
    /// Regulator schedule
    #[default]
    Irda,
    Other(String),
}

impl DepreciationMode {
    pub fn as_str(&self) -> &str {
        match self {
            DepreciationMode::Irda => "irda",
            DepreciationMode::Other(raw) => raw,
        }
    }
}

impl Serialize for DepreciationMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DepreciationMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            None | Some("") | Some("irda") => DepreciationMode::Irda,
            Some(other) => DepreciationMode::Other(other.to_string()),
        })
    }
}

/// Claim-level deductions subtracted from the admissible total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub betterment: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub excess: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub salvage: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub non_admissible: Decimal,
}

impl Deductions {
    pub fn new(betterment: Decimal, excess: Decimal, salvage: Decimal, non_admissible: Decimal) -> Self {
        Self {
            betterment,
            excess,
            salvage,
            non_admissible,
        }
    }

    fn total(&self) -> Decimal {
        self.betterment
            .saturating_add(self.excess)
            .saturating_add(self.salvage)
            .saturating_add(self.non_admissible)
    }
}

/// Aggregates computed over the whole estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTotals {
    pub total_admissible: Decimal,
    pub depreciation_total: Decimal,
    /// May be negative when deductions exceed what is admissible
    pub net_assessed: Decimal,
}

/// The assessment section of a claim: deductions entered by the surveyor and
/// the last computed aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default)]
    pub dep_mode: DepreciationMode,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub betterment: Decimal,
    /// `None` means the policy's default excess applies
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub excess: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub salvage: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub non_admissible: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_admissible: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub depreciation_total: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub net_assessed: Decimal,
}

impl Assessment {
    /// A blank assessment for a new claim, carrying the policy's excess
    pub fn with_default_excess(excess: Decimal) -> Self {
        Self {
            excess: Some(excess),
            ..Self::default()
        }
    }

    /// The deductions to feed the engine, filling a missing excess from the policy
    pub fn deductions(&self, policy: &DepreciationPolicy) -> Deductions {
        Deductions {
            betterment: self.betterment,
            excess: self.excess.unwrap_or(policy.default_excess),
            salvage: self.salvage,
            non_admissible: self.non_admissible,
        }
    }

    /// The stored aggregates
    pub fn totals(&self) -> AssessmentTotals {
        AssessmentTotals {
            total_admissible: self.total_admissible,
            depreciation_total: self.depreciation_total,
            net_assessed: self.net_assessed,
        }
    }

    /// Overwrites the stored aggregates
    pub fn apply_totals(&mut self, totals: AssessmentTotals) {
        self.total_admissible = totals.total_admissible;
        self.depreciation_total = totals.depreciation_total;
        self.net_assessed = totals.net_assessed;
    }
}

fn percent_of(value: Decimal, percent: Decimal) -> Decimal {
    value.saturating_mul(percent) / dec!(100)
}

fn item_depreciation(item: &EstimateLineItem, policy: &DepreciationPolicy) -> Decimal {
    percent_of(item.amount, depreciation_rate_for(&item.category, policy))
}

/// Recomputes an item's derived amounts from its inputs.
///
/// Never fails; inputs have already been coerced to numbers when the item was
/// read. Running it twice gives the same item.
pub fn recompute_item(item: &EstimateLineItem, policy: &DepreciationPolicy) -> EstimateLineItem {
    let amount = item.quantity.saturating_mul(item.unit_rate);
    let tax = percent_of(amount, item.tax_percent);
    let depreciation = percent_of(amount, depreciation_rate_for(&item.category, policy));
    let admissible = amount
        .saturating_sub(depreciation)
        .max(Decimal::ZERO)
        .saturating_add(tax);

    EstimateLineItem {
        amount,
        tax,
        depreciation_amount: depreciation,
        admissible,
        ..item.clone()
    }
}

/// Computes the claim aggregates from already recomputed items.
///
/// `depreciation_total` is taken from each item's amount and the policy, so
/// it cannot drift from a stale `depreciation_amount`. The net value is not
/// clamped.
pub fn recompute_assessment(
    items: &[EstimateLineItem],
    policy: &DepreciationPolicy,
    deductions: &Deductions,
) -> AssessmentTotals {
    let (total_admissible, depreciation_total) = items.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(admissible, depreciation), item| {
            (
                admissible.saturating_add(item.admissible),
                depreciation.saturating_add(item_depreciation(item, policy)),
            )
        },
    );

    let net_assessed = total_admissible
        .saturating_sub(depreciation_total)
        .saturating_sub(deductions.total());

    debug!(
        items = items.len(),
        %total_admissible,
        %depreciation_total,
        %net_assessed,
        "Assessment recomputed"
    );

    AssessmentTotals {
        total_admissible,
        depreciation_total,
        net_assessed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::LineItemCategory;
    use serde_json::json;

    fn policy() -> DepreciationPolicy {
        DepreciationPolicy::new(dec!(30), dec!(50), dec!(0), dec!(30), dec!(1000))
    }

    fn item(category: LineItemCategory, qty: Decimal, rate: Decimal, tax: Decimal) -> EstimateLineItem {
        EstimateLineItem::new(category, "", qty, rate, tax)
    }

    #[test]
    fn test_part_item() {
        let it = recompute_item(&item(LineItemCategory::Part, dec!(1), dec!(1000), dec!(18)), &policy());
        assert_eq!(it.amount, dec!(1000));
        assert_eq!(it.tax, dec!(180));
        assert_eq!(it.depreciation_amount, dec!(300));
        assert_eq!(it.admissible, dec!(880));
    }

    #[test]
    fn test_labour_item_does_not_depreciate() {
        let it = recompute_item(&item(LineItemCategory::Labour, dec!(1), dec!(1000), dec!(18)), &policy());
        assert_eq!(it.depreciation_amount, dec!(0));
        assert_eq!(it.admissible, dec!(1180));
    }

    #[test]
    fn test_zero_inputs() {
        let p = policy();
        for (qty, rate) in [(dec!(0), dec!(1000)), (dec!(3), dec!(0))] {
            let it = recompute_item(&item(LineItemCategory::Paint, qty, rate, dec!(18)), &p);
            assert_eq!(it.amount, dec!(0));
            assert_eq!(it.tax, dec!(0));
            assert_eq!(it.admissible, dec!(0));
        }
    }

    #[test]
    fn test_depreciation_over_hundred_percent_floors_at_tax() {
        let p = DepreciationPolicy::new(dec!(150), dec!(0), dec!(0), dec!(0), dec!(0));
        let it = recompute_item(&item(LineItemCategory::Part, dec!(1), dec!(100), dec!(10)), &p);
        assert_eq!(it.depreciation_amount, dec!(150));
        assert_eq!(it.admissible, dec!(10));
    }

    #[test]
    fn test_net_assessed_can_be_negative() {
        let p = policy();
        let items = vec![recompute_item(&item(LineItemCategory::Part, dec!(1), dec!(1000), dec!(18)), &p)];
        let totals = recompute_assessment(&items, &p, &Deductions::new(dec!(500), dec!(1000), dec!(0), dec!(0)));

        assert_eq!(totals.total_admissible, dec!(880));
        assert_eq!(totals.depreciation_total, dec!(300));
        assert_eq!(totals.net_assessed, dec!(-920));
    }

    #[test]
    fn test_empty_estimate() {
        let totals = recompute_assessment(&[], &policy(), &Deductions::new(dec!(0), dec!(1000), dec!(0), dec!(0)));
        assert_eq!(totals.total_admissible, dec!(0));
        assert_eq!(totals.depreciation_total, dec!(0));
        assert_eq!(totals.net_assessed, dec!(-1000));
    }

    #[test]
    fn test_missing_excess_falls_back_to_policy() {
        let assessment: Assessment = serde_json::from_value(json!({"betterment": "50"})).unwrap();
        assert_eq!(assessment.excess, None);
        assert_eq!(assessment.deductions(&policy()).excess, dec!(1000));

        let assessment: Assessment = serde_json::from_value(json!({"excess": 0})).unwrap();
        assert_eq!(assessment.deductions(&policy()).excess, dec!(0));
    }

    #[test]
    fn test_dep_mode_values() {
        let a: Assessment = serde_json::from_value(json!({})).unwrap();
        assert_eq!(a.dep_mode, DepreciationMode::Irda);
        let a: Assessment = serde_json::from_value(json!({"depMode": "custom"})).unwrap();
        assert_eq!(a.dep_mode, DepreciationMode::Other("custom".to_string()));
        assert_eq!(serde_json::to_value(&a).unwrap()["depMode"], json!("custom"));
    }
}
