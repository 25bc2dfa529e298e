use crate::domain::entities::row::RowRecord;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
}

/// Supplies the rows behind each table. Rows come back whole; partial
/// updates are not part of the contract.
pub trait MarketDataSource: Send + Sync {
    fn load_coins(&self) -> Result<Vec<RowRecord>, SourceError>;
    fn load_categories(&self) -> Result<Vec<RowRecord>, SourceError>;
}
