//! Repair estimate and its line items

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use core_kernel::numeric::{coerce_decimal, lenient_decimal, lenient_list, lenient_string};

/// Kind of repair entry. Decides which depreciation rate applies.
///
/// Values outside the known set are kept as `Other` so they survive a
/// load/save round trip; they depreciate like parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LineItemCategory {
    #[default]
    Part,
    Paint,
    Fibre,
    Glass,
    Labour,
    Consumable,
    Other(String),
}

impl LineItemCategory {
    /// Returns the stored spelling of the category
    pub fn as_str(&self) -> &str {
        match self {
            LineItemCategory::Part => "part",
            LineItemCategory::Paint => "paint",
            LineItemCategory::Fibre => "fibre",
            LineItemCategory::Glass => "glass",
            LineItemCategory::Labour => "labour",
            LineItemCategory::Consumable => "consumable",
            LineItemCategory::Other(raw) => raw,
        }
    }

    /// Returns true for categories outside the known set
    pub fn is_recognised(&self) -> bool {
        !matches!(self, LineItemCategory::Other(_))
    }
}

impl From<&str> for LineItemCategory {
    fn from(raw: &str) -> Self {
        match raw {
            "" | "part" => LineItemCategory::Part,
            "paint" => LineItemCategory::Paint,
            "fibre" => LineItemCategory::Fibre,
            "glass" => LineItemCategory::Glass,
            "labour" => LineItemCategory::Labour,
            "consumable" => LineItemCategory::Consumable,
            other => LineItemCategory::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LineItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LineItemCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LineItemCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => LineItemCategory::from(s.as_str()),
            _ => LineItemCategory::Part,
        })
    }
}

/// One billable entry on the estimate.
///
/// `amount`, `tax`, `depreciation_amount` and `admissible` are derived and
/// only meaningful after a recompute against the active policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateLineItem {
    #[serde(rename = "type", default)]
    pub category: LineItemCategory,
    #[serde(rename = "desc", default, deserialize_with = "core_kernel::numeric::lenient_string")]
    pub description: String,
    #[serde(rename = "qty", default, deserialize_with = "lenient_decimal")]
    pub quantity: Decimal,
    #[serde(rename = "rate", default, deserialize_with = "lenient_decimal")]
    pub unit_rate: Decimal,
    #[serde(rename = "taxPct", default, deserialize_with = "lenient_decimal")]
    pub tax_percent: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub tax: Decimal,
    #[serde(rename = "depAmount", default, deserialize_with = "lenient_decimal")]
    pub depreciation_amount: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub admissible: Decimal,
}

impl Default for EstimateLineItem {
    /// A fresh row as added from the estimate screen: one part at 18% tax
    fn default() -> Self {
        Self {
            category: LineItemCategory::Part,
            description: String::new(),
            quantity: dec!(1),
            unit_rate: Decimal::ZERO,
            tax_percent: dec!(18),
            amount: Decimal::ZERO,
            tax: Decimal::ZERO,
            depreciation_amount: Decimal::ZERO,
            admissible: Decimal::ZERO,
        }
    }
}

impl EstimateLineItem {
    /// Creates an item with the given inputs; derived values start at zero
    pub fn new(
        category: LineItemCategory,
        description: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
        tax_percent: Decimal,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            quantity,
            unit_rate,
            tax_percent,
            ..Self::default()
        }
    }
}

/// Partial edit of a line item's inputs; absent fields stay as they are.
///
/// Numeric fields are coerced leniently, so `"qty": "abc"` sets the quantity
/// to zero rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemPatch {
    #[serde(rename = "type", default)]
    pub category: Option<LineItemCategory>,
    #[serde(rename = "desc", default)]
    pub description: Option<String>,
    #[serde(rename = "qty", default)]
    pub quantity: Option<Value>,
    #[serde(rename = "rate", default)]
    pub unit_rate: Option<Value>,
    #[serde(rename = "taxPct", default)]
    pub tax_percent: Option<Value>,
}

impl LineItemPatch {
    /// Writes the present fields onto an item
    pub fn apply_to(&self, item: &mut EstimateLineItem) {
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(quantity) = &self.quantity {
            item.quantity = coerce_decimal(quantity);
        }
        if let Some(unit_rate) = &self.unit_rate {
            item.unit_rate = coerce_decimal(unit_rate);
        }
        if let Some(tax_percent) = &self.tax_percent {
            item.tax_percent = coerce_decimal(tax_percent);
        }
    }
}

/// Workshop estimate header plus the ordered line items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Estimate {
    #[serde(deserialize_with = "lenient_string")]
    pub workshop: String,
    #[serde(deserialize_with = "lenient_string")]
    pub workshop_gstin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub estimate_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bill_date: String,
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<EstimateLineItem>,
}

impl Estimate {
    /// Sum of item amounts before tax
    pub fn sum_amount(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, it| acc.saturating_add(it.amount))
    }

    /// Sum of item tax
    pub fn sum_tax(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, it| acc.saturating_add(it.tax))
    }

    /// Sum of item admissible amounts
    pub fn sum_admissible(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, it| acc.saturating_add(it.admissible))
    }
}
