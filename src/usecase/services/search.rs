use crate::domain::entities::row::RowRecord;

/// Rows whose text `fields` contain `query`, ignoring case. A blank query
/// keeps everything.
pub fn filter_rows(rows: &[RowRecord], query: &str, fields: &[&str]) -> Vec<RowRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            fields.iter().any(|field| {
                row.text(field)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}
