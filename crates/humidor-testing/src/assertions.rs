//! Assertions over the CLI's JSON envelope (`{"badge", "content", "suggestions"}`).

use anyhow::{Context, Result};
use serde_json::Value;

fn content_array<'a>(json: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    json["content"][key]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", key))
}

/// Assert the number of cigars in a list or browse result.
pub fn assert_cigar_count(json: &Value, expected: usize) -> Result<()> {
    let cigars = content_array(json, "cigars")?;
    if cigars.len() != expected {
        anyhow::bail!("Expected {} cigars, got {}", expected, cigars.len());
    }
    Ok(())
}

/// Assert the cigar list contains exactly these brands, in order.
pub fn assert_brands(json: &Value, expected: &[&str]) -> Result<()> {
    let brands: Vec<&str> = content_array(json, "cigars")?
        .iter()
        .filter_map(|c| c["brand"].as_str())
        .collect();

    if brands != expected {
        anyhow::bail!("Expected brands {:?}, got {:?}", expected, brands);
    }
    Ok(())
}

/// Assert the badge level (`success`, `info` or `warning`).
pub fn assert_badge(json: &Value, level: &str) -> Result<()> {
    let actual = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if actual != level {
        anyhow::bail!("Expected badge level {}, got {}", level, actual);
    }
    Ok(())
}

/// Find a dashboard panel by key.
pub fn find_panel<'a>(json: &'a Value, key: &str) -> Result<&'a Value> {
    content_array(json, "panels")?
        .iter()
        .find(|p| p["key"] == key)
        .with_context(|| format!("Panel '{}' not found", key))
}

/// Assert a bucket panel's rows as (label, quantity) pairs, in order.
pub fn assert_panel_rows(json: &Value, key: &str, expected: &[(&str, u64)]) -> Result<()> {
    let panel = find_panel(json, key)?;
    let rows: Vec<(String, u64)> = panel["rows"]
        .as_array()
        .with_context(|| format!("Panel '{}' has no rows", key))?
        .iter()
        .map(|row| {
            (
                row["label"].as_str().unwrap_or_default().to_string(),
                row["quantity"].as_u64().unwrap_or_default(),
            )
        })
        .collect();

    let expected: Vec<(String, u64)> = expected
        .iter()
        .map(|(label, quantity)| (label.to_string(), *quantity))
        .collect();

    if rows != expected {
        anyhow::bail!("Panel '{}': expected {:?}, got {:?}", key, expected, rows);
    }
    Ok(())
}
