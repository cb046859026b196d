//! Depreciation policy and the per-category rate lookup

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::estimate::LineItemCategory;

/// Admin-configured depreciation rates, shared by every claim.
///
/// Rates are percentages (30 means 30%). Stored under the `dep` key of the
/// admin document as `{parts, paint, glass, fibre, excess}`; the longer
/// `partsPct`-style names are accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationPolicy {
    /// Rate for parts and any category without its own rate
    #[serde(
        rename = "parts",
        alias = "partsPct",
        default,
        deserialize_with = "core_kernel::numeric::lenient_decimal"
    )]
    pub parts_pct: Decimal,
    #[serde(
        rename = "paint",
        alias = "paintPct",
        default,
        deserialize_with = "core_kernel::numeric::lenient_decimal"
    )]
    pub paint_pct: Decimal,
    #[serde(
        rename = "glass",
        alias = "glassPct",
        default,
        deserialize_with = "core_kernel::numeric::lenient_decimal"
    )]
    pub glass_pct: Decimal,
    #[serde(
        rename = "fibre",
        alias = "fibrePct",
        default,
        deserialize_with = "core_kernel::numeric::lenient_decimal"
    )]
    pub fibre_pct: Decimal,
    /// Excess put on new claims
    #[serde(
        rename = "excess",
        alias = "defaultExcess",
        default,
        deserialize_with = "core_kernel::numeric::lenient_decimal"
    )]
    pub default_excess: Decimal,
}

impl Default for DepreciationPolicy {
    fn default() -> Self {
        Self {
            parts_pct: dec!(30),
            paint_pct: dec!(50),
            glass_pct: dec!(0),
            fibre_pct: dec!(30),
            default_excess: dec!(1000),
        }
    }
}

impl DepreciationPolicy {
    /// Builds a policy from explicit rates
    pub fn new(
        parts_pct: Decimal,
        paint_pct: Decimal,
        glass_pct: Decimal,
        fibre_pct: Decimal,
        default_excess: Decimal,
    ) -> Self {
        Self {
            parts_pct,
            paint_pct,
            glass_pct,
            fibre_pct,
            default_excess,
        }
    }

    /// Returns the depreciation percentage for a category
    pub fn rate_for(&self, category: &LineItemCategory) -> Decimal {
        depreciation_rate_for(category, self)
    }
}

/// Maps a line-item category to its depreciation percentage.
///
/// Labour and consumables never depreciate. Unrecognised categories use the
/// parts rate.
pub fn depreciation_rate_for(category: &LineItemCategory, policy: &DepreciationPolicy) -> Decimal {
    match category {
        LineItemCategory::Part => policy.parts_pct,
        LineItemCategory::Paint => policy.paint_pct,
        LineItemCategory::Fibre => policy.fibre_pct,
        LineItemCategory::Glass => policy.glass_pct,
        LineItemCategory::Labour | LineItemCategory::Consumable => Decimal::ZERO,
        LineItemCategory::Other(_) => policy.parts_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy() -> DepreciationPolicy {
        DepreciationPolicy::new(dec!(30), dec!(50), dec!(5), dec!(25), dec!(1000))
    }

    #[test]
    fn test_rate_per_category() {
        let p = policy();
        assert_eq!(depreciation_rate_for(&LineItemCategory::Part, &p), dec!(30));
        assert_eq!(depreciation_rate_for(&LineItemCategory::Paint, &p), dec!(50));
        assert_eq!(depreciation_rate_for(&LineItemCategory::Glass, &p), dec!(5));
        assert_eq!(depreciation_rate_for(&LineItemCategory::Fibre, &p), dec!(25));
        assert_eq!(depreciation_rate_for(&LineItemCategory::Labour, &p), dec!(0));
        assert_eq!(depreciation_rate_for(&LineItemCategory::Consumable, &p), dec!(0));
    }

    #[test]
    fn test_unrecognised_category_uses_parts_rate() {
        let p = policy();
        let misc = LineItemCategory::Other("misc".to_string());
        assert_eq!(p.rate_for(&misc), p.rate_for(&LineItemCategory::Part));
    }

    #[test]
    fn test_default_policy() {
        let p = DepreciationPolicy::default();
        assert_eq!(p.parts_pct, dec!(30));
        assert_eq!(p.paint_pct, dec!(50));
        assert_eq!(p.glass_pct, dec!(0));
        assert_eq!(p.fibre_pct, dec!(30));
        assert_eq!(p.default_excess, dec!(1000));
    }

    #[test]
    fn test_reads_stored_shape_leniently() {
        let p: DepreciationPolicy = serde_json::from_value(json!({
            "parts": "30", "paint": 50, "glass": "", "fibre": null, "excess": 1500
        }))
        .unwrap();
        assert_eq!(p, DepreciationPolicy::new(dec!(30), dec!(50), dec!(0), dec!(0), dec!(1500)));
    }

    #[test]
    fn test_accepts_long_names() {
        let p: DepreciationPolicy = serde_json::from_value(json!({
            "partsPct": 10, "paintPct": 20, "glassPct": 30, "fibrePct": 40, "defaultExcess": 500
        }))
        .unwrap();
        assert_eq!(p, DepreciationPolicy::new(dec!(10), dec!(20), dec!(30), dec!(40), dec!(500)));
    }
}
