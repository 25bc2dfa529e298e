use std::path::{Path, PathBuf};

use crate::domain::entities::market::CATEGORY_RANK;
use crate::domain::entities::row::{FieldValue, RowRecord};
use crate::infra::import::csv::import_csv_rows;
use crate::infra::import::json::import_json_rows;
use crate::usecase::ports::source::{MarketDataSource, SourceError};

/// Rows saved from the market-data API as `.json` or `.csv` files.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    pub coins_path: Option<PathBuf>,
    pub categories_path: Option<PathBuf>,
}

impl SnapshotSource {
    pub fn new(coins_path: Option<PathBuf>, categories_path: Option<PathBuf>) -> Self {
        Self {
            coins_path,
            categories_path,
        }
    }
}

impl MarketDataSource for SnapshotSource {
    fn load_coins(&self) -> Result<Vec<RowRecord>, SourceError> {
        match &self.coins_path {
            Some(path) => import_snapshot(path),
            None => Ok(Vec::new()),
        }
    }

    fn load_categories(&self) -> Result<Vec<RowRecord>, SourceError> {
        match &self.categories_path {
            Some(path) => import_snapshot(path).map(with_category_rank),
            None => Ok(Vec::new()),
        }
    }
}

pub fn import_snapshot(path: &Path) -> Result<Vec<RowRecord>, SourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if !path.is_file() {
        return Err(SourceError::Io {
            path: path.display().to_string(),
            message: "file not found".to_string(),
        });
    }

    let result = match ext.as_str() {
        "json" => import_json_rows(path),
        "csv" => import_csv_rows(path),
        _ => return Err(SourceError::UnsupportedFormat(path.display().to_string())),
    };

    result.map_err(|err| SourceError::Parse {
        path: path.display().to_string(),
        message: format!("{err:#}"),
    })
}

/// The categories endpoint has no rank column; its order is by market cap,
/// so the input position stands in for one.
fn with_category_rank(rows: Vec<RowRecord>) -> Vec<RowRecord> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            if row.contains(CATEGORY_RANK) {
                row
            } else {
                row.with(CATEGORY_RANK, FieldValue::Number((idx + 1) as f64))
            }
        })
        .collect()
}
