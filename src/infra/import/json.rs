use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::entities::row::{FieldValue, RowRecord};

pub fn import_json_rows(json_path: &Path) -> Result<Vec<RowRecord>> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to open json: {}", json_path.display()))?;
    parse_json_rows(&text).with_context(|| format!("failed to read json: {}", json_path.display()))
}

/// Parses a market-data response: a top-level array of flat objects.
///
/// `null`, nested objects and arrays (e.g. `roi`) are dropped from the row.
pub fn parse_json_rows(text: &str) -> Result<Vec<RowRecord>> {
    let value: Value = serde_json::from_str(text).context("invalid json")?;
    let Value::Array(items) = value else {
        anyhow::bail!("expected a json array of rows")
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .filter_map(|(name, value)| json_field_value(value).map(|value| (name, value)))
                .collect::<RowRecord>()),
            other => Err(anyhow::anyhow!(
                "row {idx} is not an object: {}",
                json_type_name(&other)
            )),
        })
        .collect()
}

fn json_field_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::Number(number) => number.as_f64().map(FieldValue::Number),
        Value::String(text) => Some(FieldValue::Text(text)),
        Value::Bool(flag) => Some(FieldValue::Text(flag.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
