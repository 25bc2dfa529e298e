use std::sync::Arc;

use crate::domain::entities::row::RowRecord;
use crate::usecase::ports::source::{MarketDataSource, SourceError};

pub struct MarketService {
    source: Arc<dyn MarketDataSource>,
}

impl MarketService {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    pub fn load_coins(&self) -> Result<Vec<RowRecord>, SourceError> {
        match self.source.load_coins() {
            Ok(rows) => {
                tracing::info!(rows = rows.len(), "loaded coin rows");
                Ok(rows)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load coin rows");
                Err(err)
            }
        }
    }

    pub fn load_categories(&self) -> Result<Vec<RowRecord>, SourceError> {
        match self.source.load_categories() {
            Ok(rows) => {
                tracing::info!(rows = rows.len(), "loaded category rows");
                Ok(rows)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load category rows");
                Err(err)
            }
        }
    }
}
