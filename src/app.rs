use std::rc::Rc;
use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;

use crate::config::load_app_config;
use crate::domain::entities::market::{IMAGE, NAME};
use crate::domain::entities::row::RowRecord;
use crate::domain::entities::table::{CellFormat, HeadCell, TableSchema};
use crate::infra::snapshot::source::SnapshotSource;
use crate::platform::desktop::dialog::pick_snapshot_file;
use crate::ui::format::{cell_color, format_cell, symbol_label};
use crate::ui::state::app_state::{AppState, TableState, TableTab};
use crate::ui::styles::{
    body_cell_style, chip_style, empty_rows_style, root_container_style, table_container_style,
    table_header_cell_style, table_style, visually_hidden_style,
};
use crate::ui::table_head::{column_alignment, head_cell_state, pagination_label, sort_arrow};
use crate::usecase::ports::source::SourceError;
use crate::usecase::services::market_service::MarketService;
use crate::usecase::services::search::filter_rows;
use crate::usecase::services::table_view::TableView;

/// Stores a fresh load and shows its first page under the current search.
fn apply_rows(mut table: TableState, rows: Vec<RowRecord>, query: &str, fields: &[&str]) {
    let filtered = filter_rows(&rows, query, fields);
    table.all_rows.set(rows);
    let mut view = table.view.write();
    view.replace_rows(filtered);
    view.request_page(0);
}

fn refilter(mut table: TableState, query: &str, fields: &[&str]) {
    let filtered = filter_rows(&table.all_rows.read(), query, fields);
    let mut view = table.view.write();
    view.replace_rows(filtered);
    view.request_page(0);
}

fn load_table(
    service: &MarketService,
    tab: TableTab,
    table: TableState,
    fields: &[&str],
    query: &str,
) -> Result<usize, SourceError> {
    let rows = match tab {
        TableTab::Cryptocurrencies => service.load_coins()?,
        TableTab::Categories => service.load_categories()?,
    };
    let count = rows.len();
    apply_rows(table, rows, query, fields);
    Ok(count)
}

fn load_all_tables(
    service: &MarketService,
    tables: [(TableTab, TableState, &[&str]); 2],
    query: &str,
) -> String {
    let parts: Vec<String> = tables
        .into_iter()
        .map(
            |(tab, table, fields)| match load_table(service, tab, table, fields, query) {
                Ok(count) => format!("{count} {}", tab.label().to_lowercase()),
                Err(err) => format!("{} failed: {err}", tab.label()),
            },
        )
        .collect();
    format!("{} ({})", parts.join(", "), Local::now().format("%H:%M:%S"))
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_app_config);
    let service = use_hook(|| {
        Rc::new(MarketService::new(Arc::new(SnapshotSource::new(
            config.data.coins_path.clone(),
            config.data.categories_path.clone(),
        ))))
    });

    let state = AppState::new(config.table.page_size);
    let coins = state.coins;
    let categories = state.categories;
    let mut active_tab = state.active_tab;
    let mut search = state.search;
    let mut busy = state.busy;
    let mut status = state.status;
    let coin_fields = state.coins_schema.search_fields.clone();
    let category_fields = state.categories_schema.search_fields.clone();

    let service_for_init = service.clone();
    let coin_fields_for_init = coin_fields.clone();
    let category_fields_for_init = category_fields.clone();
    use_effect(move || {
        busy.set(true);
        let query = String::clone(&search.peek());
        let message = load_all_tables(
            &service_for_init,
            [
                (TableTab::Cryptocurrencies, coins, coin_fields_for_init.as_slice()),
                (TableTab::Categories, categories, category_fields_for_init.as_slice()),
            ],
            &query,
        );
        status.set(message);
        busy.set(false);
    });

    let current_tab = active_tab();
    let (current_table, current_schema) = state.table(current_tab);
    let current_schema = current_schema.clone();
    let chips: Vec<(TableTab, &'static str, &'static str)> = TableTab::ALL
        .iter()
        .map(|&tab| (tab, tab.label(), chip_style(tab == current_tab)))
        .collect();
    let search_text = search();
    let status_text = status();

    let coin_fields_for_search = coin_fields.clone();
    let category_fields_for_search = category_fields.clone();
    let coin_fields_for_import = coin_fields;
    let category_fields_for_import = category_fields;

    rsx! {
        div { style: "{root_container_style()}",
            h1 { style: "text-align: center; margin: 1em 0 0.5em;", "Crypto Tracker" }
            div { style: "display: flex; justify-content: center; margin-bottom: 1.5em;",
                input {
                    r#type: "search",
                    placeholder: "Search",
                    value: "{search_text}",
                    style: "padding: 10px 14px; min-width: 280px; border: 1px solid #bbb; border-radius: 4px;",
                    oninput: move |event| {
                        let query = event.value();
                        search.set(query.clone());
                        refilter(coins, &query, &coin_fields_for_search);
                        refilter(categories, &query, &category_fields_for_search);
                    }
                }
            }
            nav { style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                for (tab, label, chip) in chips {
                    button {
                        key: "{label}",
                        style: "{chip}",
                        onclick: move |_| active_tab.set(tab),
                        "{label}"
                    }
                }
                button {
                    disabled: busy(),
                    style: "margin-left: auto; border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        if busy() {
                            return;
                        }
                        let Some(file_path) = pick_snapshot_file() else {
                            status.set("Import cancelled".to_string());
                            return;
                        };

                        busy.set(true);
                        let tab = active_tab();
                        let (table, fields, source) = match tab {
                            TableTab::Cryptocurrencies => (
                                coins,
                                &coin_fields_for_import,
                                SnapshotSource::new(Some(file_path.clone()), None),
                            ),
                            TableTab::Categories => (
                                categories,
                                &category_fields_for_import,
                                SnapshotSource::new(None, Some(file_path.clone())),
                            ),
                        };
                        let service = MarketService::new(Arc::new(source));
                        let query = String::clone(&search.peek());
                        match load_table(&service, tab, table, fields, &query) {
                            Ok(count) => status.set(format!(
                                "Loaded {count} rows from {}",
                                file_path.display()
                            )),
                            Err(err) => status.set(format!("Import failed: {err}")),
                        }
                        busy.set(false);
                    },
                    "Open snapshot"
                }
            }
            MarketTable { schema: current_schema, view: current_table.view }
            p { style: "color: #555; font-size: 0.9em;", "{status_text}" }
        }
    }
}

/// One table component for every schema; only the columns differ.
#[component]
fn MarketTable(schema: TableSchema, view: Signal<TableView>) -> Element {
    let snapshot = view.read().clone();
    let visible: Vec<RowRecord> = snapshot.visible_rows().into_iter().cloned().collect();
    let empty_rows = snapshot.empty_row_count();
    let column_count = schema.head_cells.len();
    let body_cells = schema.head_cells.clone();

    rsx! {
        div { style: "{table_container_style()}",
            table { style: "{table_style()}", "aria-label": "enhanced table",
                TableHead { head_cells: schema.head_cells, view }
                tbody {
                    for (row_idx, row) in visible.into_iter().enumerate() {
                        tr { key: "{row_idx}",
                            for cell in body_cells.iter() {
                                {render_body_cell(cell, &row)}
                            }
                        }
                    }
                    if empty_rows > 0 {
                        tr { style: "{empty_rows_style(empty_rows)}",
                            td { colspan: "{column_count}" }
                        }
                    }
                }
            }
        }
        TablePagination { view }
    }
}

fn render_body_cell(cell: &HeadCell, row: &RowRecord) -> Element {
    let style = body_cell_style(column_alignment(cell), cell_color(cell, row), cell.sticky_left);

    if cell.format == CellFormat::Name {
        let name = row.text(NAME).unwrap_or_default().to_string();
        let symbol = symbol_label(row);
        let image = row.text(IMAGE).map(str::to_string).map(|src| {
            rsx! {
                img { src: "{src}", alt: "{name}", width: "24", height: "24" }
            }
        });
        return rsx! {
            td { style: "{style}",
                div { style: "display: flex; align-items: center; gap: 8px;",
                    {image}
                    span { "{name}" }
                    span { style: "color: #777;", "{symbol}" }
                }
            }
        };
    }

    let text = format_cell(cell, row);
    rsx! {
        td { style: "{style}", "{text}" }
    }
}

#[component]
fn TableHead(head_cells: Vec<HeadCell>, mut view: Signal<TableView>) -> Element {
    let snapshot = view.read().clone();
    let cells: Vec<(HeadCell, String, &'static str, &'static str, Option<&'static str>)> =
        head_cells
            .into_iter()
            .map(|cell| {
                let state = head_cell_state(&cell, &snapshot);
                let style = table_header_cell_style(state.align, cell.min_width, cell.sticky_left);
                (
                    cell,
                    style,
                    state.aria_sort,
                    sort_arrow(&state),
                    state.hidden_label,
                )
            })
            .collect();

    rsx! {
        thead {
            tr {
                for (cell, style, aria_sort, arrow, hidden_label) in cells {
                    th {
                        key: "{cell.id}",
                        style: "{style}",
                        "aria-sort": aria_sort,
                        onclick: move |_| view.write().request_sort(cell.id),
                        span { "{cell.label}" }
                        span { style: "margin-left: 4px;", "{arrow}" }
                        {hidden_label.map(|label| rsx! {
                            span { style: "{visually_hidden_style()}", "{label}" }
                        })}
                    }
                }
            }
        }
    }
}

#[component]
fn TablePagination(mut view: Signal<TableView>) -> Element {
    let snapshot = view.read().clone();
    let label = pagination_label(&snapshot);
    let page_size = snapshot.page_size();
    let page_index = snapshot.page_index();
    let has_previous = snapshot.has_previous_page();
    let has_next = snapshot.has_next_page();

    rsx! {
        div { style: "display: flex; justify-content: flex-end; align-items: center; gap: 12px; padding: 8px 0;",
            span { "Rows per page: {page_size}" }
            span { "{label}" }
            button {
                disabled: !has_previous,
                "aria-label": "Go to previous page",
                onclick: move |_| view.write().request_page(page_index.saturating_sub(1)),
                "‹"
            }
            button {
                disabled: !has_next,
                "aria-label": "Go to next page",
                onclick: move |_| view.write().request_page(page_index + 1),
                "›"
            }
        }
    }
}
