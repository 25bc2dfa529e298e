use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::market::{categories_schema, coins_schema};
use crate::domain::entities::row::RowRecord;
use crate::domain::entities::table::TableSchema;
use crate::usecase::services::table_view::TableView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableTab {
    #[default]
    Cryptocurrencies,
    Categories,
}

impl TableTab {
    pub const ALL: [TableTab; 2] = [TableTab::Cryptocurrencies, TableTab::Categories];

    pub fn label(self) -> &'static str {
        match self {
            TableTab::Cryptocurrencies => "Cryptocurrencies",
            TableTab::Categories => "Categories",
        }
    }
}

/// Per-table signals: the full load and the view over the filtered rows.
#[derive(Clone, Copy)]
pub struct TableState {
    pub all_rows: Signal<Vec<RowRecord>>,
    pub view: Signal<TableView>,
}

pub struct AppState {
    pub coins: TableState,
    pub categories: TableState,
    pub coins_schema: TableSchema,
    pub categories_schema: TableSchema,
    pub active_tab: Signal<TableTab>,
    pub search: Signal<String>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        let coins_schema = coins_schema(page_size);
        let categories_schema = categories_schema(page_size);
        let coins_view = TableView::from_schema(Vec::<RowRecord>::new(), &coins_schema);
        let categories_view = TableView::from_schema(Vec::<RowRecord>::new(), &categories_schema);

        Self {
            coins: TableState {
                all_rows: use_signal(Vec::<RowRecord>::new),
                view: use_signal(move || coins_view),
            },
            categories: TableState {
                all_rows: use_signal(Vec::<RowRecord>::new),
                view: use_signal(move || categories_view),
            },
            coins_schema,
            categories_schema,
            active_tab: use_signal(TableTab::default),
            search: use_signal(String::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }

    pub fn table(&self, tab: TableTab) -> (TableState, &TableSchema) {
        match tab {
            TableTab::Cryptocurrencies => (self.coins, &self.coins_schema),
            TableTab::Categories => (self.categories, &self.categories_schema),
        }
    }
}
