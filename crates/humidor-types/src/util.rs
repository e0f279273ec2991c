// Lenient field readers for records that arrive as loosely typed JSON
// (exports from the web app, hand-edited import files).
//
// Rules:
// - quantity: numbers and numeric strings are accepted, fractions truncate,
//   negatives / NaN / garbage / null / missing all become 0
// - price: same, but keeps the fraction
// - text: empty or whitespace-only strings become None
// - lists: anything that is not an array of strings becomes empty

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Strength;

pub fn lenient_quantity<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(quantity_from_value).unwrap_or(0))
}

pub fn lenient_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(price_from_value).unwrap_or(0.0))
}

pub fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => non_empty(&s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub fn lenient_notes<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().and_then(non_empty))
            .collect(),
        _ => Vec::new(),
    })
}

pub fn lenient_strength<'de, D>(deserializer: D) -> std::result::Result<Option<Strength>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Strength>().ok()))
}

pub fn lenient_minutes<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(quantity_from_value)
        .filter(|minutes| *minutes > 0))
}

/// Coerce a loosely typed JSON value into a stock count.
pub fn quantity_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => u.min(u32::MAX as u64) as u32,
            None => n.as_f64().map(truncate_count).unwrap_or(0),
        },
        Value::String(s) => s.trim().parse::<f64>().map(truncate_count).unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a loosely typed JSON value into a non-negative price.
pub fn price_from_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().trim_start_matches('$').parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

/// Trimmed copy of `s`, or None when nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn truncate_count(f: f64) -> u32 {
    if f.is_finite() && f > 0.0 {
        f.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_from_value() {
        assert_eq!(quantity_from_value(&json!(12)), 12);
        assert_eq!(quantity_from_value(&json!(2.9)), 2);
        assert_eq!(quantity_from_value(&json!(-4)), 0);
        assert_eq!(quantity_from_value(&json!("7")), 7);
        assert_eq!(quantity_from_value(&json!(" 3 ")), 3);
        assert_eq!(quantity_from_value(&json!("a box")), 0);
        assert_eq!(quantity_from_value(&json!(null)), 0);
        assert_eq!(quantity_from_value(&json!({"n": 1})), 0);
    }

    #[test]
    fn test_price_from_value() {
        assert_eq!(price_from_value(&json!(12.5)), 12.5);
        assert_eq!(price_from_value(&json!("$9.99")), 9.99);
        assert_eq!(price_from_value(&json!(-1)), 0.0);
        assert_eq!(price_from_value(&json!("free")), 0.0);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Padron "), Some("Padron".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }
}
