//! Forgiving decoders for fields that upstream records sometimes carry as
//! strings, nulls or garbage. Unusable values decode as zero, which the
//! scorers treat as "not specified".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Non-negative monetary amount (budget, hourly rate).
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(to_non_negative).unwrap_or(0.0))
}

/// Whole years of experience. Fractions are truncated.
pub fn whole_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(to_non_negative)
        .map(|years| years.trunc().min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}

/// Skill list where `null` means "none listed". Non-string items are dropped.
pub fn skill_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(into_text).collect(),
        _ => Vec::new(),
    })
}

/// Optional free text such as a duration. Non-string values read as absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(into_text))
}

/// The string inside `value`, if it is one.
pub fn into_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn to_non_negative(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}
