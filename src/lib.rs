//! Sortable, paginated market-data table.
//!
//! [`TableView`] holds the sort and page state over an immutable set of
//! rows and derives the visible page; [`sort_engine`] provides the stable
//! comparator it sorts with. The Dioxus [`app`] renders coins and categories
//! through the same view.

pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod platform;
pub mod ui;
pub mod usecase;

pub use domain::entities::row::{FieldValue, RowRecord};
pub use domain::entities::table::{PageState, SortDirection, SortKey, SortSpec, TableSchema};
pub use usecase::services::sort_engine;
pub use usecase::services::table_view::TableView;
