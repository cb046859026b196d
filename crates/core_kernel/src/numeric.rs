//! Lenient coercion of form-shaped values
//!
//! Claim documents are filled in from form inputs, so numeric fields arrive as
//! JSON numbers, numeric strings, empty strings or not at all. Every numeric
//! read goes through this module and never fails: anything that is not a
//! number reads as zero. Text, dates, nested sections and lists get the same
//! treatment, so one malformed field never makes a whole document unreadable.
//!
//! The serde helpers are meant for `#[serde(default, deserialize_with = ...)]`
//! so a missing key and a garbage value both land on the default.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces an arbitrary JSON value to a decimal.
///
/// Numbers and numeric strings (surrounding whitespace ignored, scientific
/// notation allowed) are parsed, `true` is one, and everything else,
/// including the empty string, is zero.
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        Value::Bool(true) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

/// Coerces an arbitrary JSON value to a non-negative whole number.
///
/// Fractions are truncated; negative or unparseable values read as zero.
pub fn coerce_u64(value: &Value) -> u64 {
    coerce_decimal(value).trunc().to_u64().unwrap_or(0)
}

fn parse_decimal(s: &str) -> Decimal {
    if s.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO)
}

/// Serde adapter reading any JSON value as a decimal
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

/// Serde adapter reading any JSON value as an optional decimal.
///
/// `null`, a missing key and a blank string are `None`; anything else is
/// coerced.
pub fn lenient_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(coerce_decimal(other)),
    })
}

/// Serde adapter reading any JSON value as a whole number
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u64(&value))
}

/// Serde adapter reading any JSON scalar as text.
///
/// Form fields are strings, but older documents may hold numbers or `null`
/// in text slots; numbers and booleans keep their JSON spelling, anything
/// else becomes empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Reads a calendar date from `YYYY-MM-DD` or the date part of an ISO
/// timestamp; anything else is `None`
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Serde adapter reading any JSON value as an optional date
pub fn lenient_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_date(&value))
}

/// Serde adapter for nested sections: `null` or a value of the wrong shape
/// reads as the default
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Serde adapter for lists: a non-array reads as empty and entries that
/// cannot be read are dropped
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(coerce_decimal(&json!(1000)), dec!(1000));
        assert_eq!(coerce_decimal(&json!(12.5)), dec!(12.5));
        assert_eq!(coerce_decimal(&json!(" 18 ")), dec!(18));
        assert_eq!(coerce_decimal(&json!("-3.25")), dec!(-3.25));
        assert_eq!(coerce_decimal(&json!("1e3")), dec!(1000));
    }

    #[test]
    fn test_garbage_reads_as_zero() {
        assert_eq!(coerce_decimal(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce_decimal(&json!("")), Decimal::ZERO);
        assert_eq!(coerce_decimal(&json!("abc")), Decimal::ZERO);
        assert_eq!(coerce_decimal(&json!([1, 2])), Decimal::ZERO);
        assert_eq!(coerce_decimal(&json!({"a": 1})), Decimal::ZERO);
        assert_eq!(coerce_decimal(&json!(false)), Decimal::ZERO);
    }

    #[test]
    fn test_true_reads_as_one() {
        assert_eq!(coerce_decimal(&json!(true)), Decimal::ONE);
    }

    #[test]
    fn test_coerce_u64() {
        assert_eq!(coerce_u64(&json!("2019")), 2019);
        assert_eq!(coerce_u64(&json!(45210.9)), 45210);
        assert_eq!(coerce_u64(&json!(-5)), 0);
        assert_eq!(coerce_u64(&json!("n/a")), 0);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_decimal")]
        qty: Decimal,
        #[serde(default, deserialize_with = "lenient_optional_decimal")]
        excess: Option<Decimal>,
        #[serde(default, deserialize_with = "lenient_string")]
        desc: String,
    }

    #[test]
    fn test_serde_adapters() {
        let row: Row = serde_json::from_value(json!({"qty": "2", "excess": "", "desc": 7})).unwrap();
        assert_eq!(row.qty, dec!(2));
        assert_eq!(row.excess, None);
        assert_eq!(row.desc, "7");

        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.qty, Decimal::ZERO);
        assert_eq!(row.excess, None);
        assert_eq!(row.desc, "");

        let row: Row = serde_json::from_value(json!({"qty": null, "excess": 0})).unwrap();
        assert_eq!(row.qty, Decimal::ZERO);
        assert_eq!(row.excess, Some(Decimal::ZERO));
    }

    #[test]
    fn test_coerce_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(coerce_date(&json!("2024-06-01")), expected);
        assert_eq!(coerce_date(&json!("2024-06-01T10:15:00.000Z")), expected);
        assert_eq!(coerce_date(&json!("")), None);
        assert_eq!(coerce_date(&json!("01/06/2024")), None);
        assert_eq!(coerce_date(&json!(null)), None);
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Section {
        #[serde(default, deserialize_with = "lenient_string")]
        name: String,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Document {
        #[serde(default, deserialize_with = "lenient_or_default")]
        section: Section,
        #[serde(default, deserialize_with = "lenient_list")]
        sections: Vec<Section>,
        #[serde(default, deserialize_with = "lenient_optional_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_structured_adapters() {
        let doc: Document = serde_json::from_value(json!({
            "section": null,
            "sections": [{"name": "a"}, "junk", {"name": null}],
            "date": ""
        }))
        .unwrap();
        assert_eq!(doc.section, Section::default());
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].name, "a");
        assert_eq!(doc.sections[1].name, "");
        assert_eq!(doc.date, None);

        let doc: Document = serde_json::from_value(json!({"section": "oops", "sections": {}})).unwrap();
        assert_eq!(doc.section, Section::default());
        assert!(doc.sections.is_empty());
    }
}
