use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::row::{FieldValue, RowRecord};

pub fn import_csv_rows(csv_path: &Path) -> Result<Vec<RowRecord>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    read_csv_rows(file)
        .with_context(|| format!("failed to read csv: {}", csv_path.display()))
}

pub fn read_csv_rows<R: Read>(input: R) -> Result<Vec<RowRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row = headers
            .iter()
            .zip(record.iter())
            .filter_map(|(name, value)| parse_cell(value).map(|value| (name, value)))
            .collect::<RowRecord>();
        rows.push(row);
    }

    Ok(rows)
}

/// Empty cells are absent; finite numbers become numeric.
pub fn parse_cell(value: &str) -> Option<FieldValue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(FieldValue::Number(number)),
        _ => Some(FieldValue::Text(trimmed.to_string())),
    }
}
