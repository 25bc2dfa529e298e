use crate::domain::entities::table::{HeadCell, SortDirection};
use crate::usecase::services::table_view::TableView;

/// What a header cell shows for the current sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCellState {
    pub active: bool,
    /// Arrow direction; inactive columns offer ascending.
    pub direction: SortDirection,
    pub aria_sort: &'static str,
    /// Screen-reader text, only on the active column.
    pub hidden_label: Option<&'static str>,
    pub align: &'static str,
}

pub fn head_cell_state(cell: &HeadCell, view: &TableView) -> HeadCellState {
    let active = view.sort_key().as_str() == cell.id;
    let direction = if active {
        view.sort_direction()
    } else {
        SortDirection::Asc
    };

    HeadCellState {
        active,
        direction,
        aria_sort: if active { direction.aria_label() } else { "none" },
        hidden_label: active.then_some(match direction {
            SortDirection::Asc => "sorted ascending",
            SortDirection::Desc => "sorted descending",
        }),
        align: column_alignment(cell),
    }
}

pub fn column_alignment(cell: &HeadCell) -> &'static str {
    if cell.numeric {
        "right"
    } else {
        "left"
    }
}

pub fn sort_arrow(state: &HeadCellState) -> &'static str {
    match (state.active, state.direction) {
        (false, _) => "",
        (true, SortDirection::Asc) => "▲",
        (true, SortDirection::Desc) => "▼",
    }
}

/// "1-25 of 250" under the table.
pub fn pagination_label(view: &TableView) -> String {
    let (from, to) = view.displayed_range();
    format!("{from}-{to} of {}", view.total_rows())
}
