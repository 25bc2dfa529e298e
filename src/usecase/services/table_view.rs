use std::sync::Arc;

use crate::domain::entities::row::RowRecord;
use crate::domain::entities::table::{PageState, SortDirection, SortKey, SortSpec, TableSchema};
use crate::usecase::services::sort_engine;

/// Sort and page state over an immutable set of rows.
///
/// Rows are shared, never mutated, and replaced only as a whole. Every
/// derived view is recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    rows: Arc<[RowRecord]>,
    sort: SortSpec,
    page: PageState,
}

impl TableView {
    pub fn new(
        rows: impl Into<Arc<[RowRecord]>>,
        rank_field: impl Into<SortKey>,
        page_size: usize,
    ) -> Self {
        Self {
            rows: rows.into(),
            sort: SortSpec::ascending(rank_field),
            page: PageState::new(page_size),
        }
    }

    pub fn from_schema(rows: impl Into<Arc<[RowRecord]>>, schema: &TableSchema) -> Self {
        Self::new(rows, schema.rank_field.clone(), schema.page_size)
    }

    /// Clicking the active column flips the direction; any other column
    /// becomes the key, ascending. The page index is left alone.
    pub fn request_sort(&mut self, field: impl Into<SortKey>) {
        let field = field.into();
        if field == self.sort.key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec::ascending(field);
        }
        tracing::debug!(
            key = %self.sort.key,
            direction = ?self.sort.direction,
            "table sort changed"
        );
    }

    /// Any index is accepted; one past the data shows an empty page.
    pub fn request_page(&mut self, page_index: usize) {
        self.page.page_index = page_index;
        tracing::debug!(page_index, "table page changed");
    }

    pub fn replace_rows(&mut self, rows: impl Into<Arc<[RowRecord]>>) {
        self.rows = rows.into();
        tracing::debug!(total_rows = self.rows.len(), "table rows replaced");
    }

    pub fn visible_rows(&self) -> Vec<&RowRecord> {
        let offset = self.page.offset();
        sort_engine::sort_order(&self.rows, &self.sort.key, self.sort.direction)
            .into_iter()
            .skip(offset)
            .take(self.page.page_size)
            .map(|idx| &self.rows[idx])
            .collect()
    }

    /// Rows the renderer pads with so every page has the same height.
    pub fn empty_row_count(&self) -> usize {
        let shown = self
            .rows
            .len()
            .saturating_sub(self.page.offset())
            .min(self.page.page_size);
        self.page.page_size - shown
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort.key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page.page_size)
    }

    /// 1-based inclusive bounds for a "from-to of total" label.
    pub fn displayed_range(&self) -> (usize, usize) {
        let total = self.rows.len();
        let offset = self.page.offset();
        if offset >= total {
            return (0, 0);
        }
        let to = offset.saturating_add(self.page.page_size).min(total);
        (offset + 1, to)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page.page_index.saturating_add(1) < self.page_count()
    }
}
