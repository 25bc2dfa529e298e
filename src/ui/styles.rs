/// Placeholder height per missing row so short pages keep the table height.
pub const EMPTY_ROW_HEIGHT_PX: usize = 53;

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 0 10%; box-sizing: border-box; font-family: sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #e0e0e0; border-radius: 6px;"
}

pub fn table_style() -> &'static str {
    "border-collapse: separate; border-spacing: 0; width: 100%; background: #fff;"
}

pub fn table_header_cell_style(align: &str, min_width: Option<u32>, sticky_left: Option<u32>) -> String {
    let mut style = format!(
        "position: sticky; top: 0; z-index: {}; background: black; color: white; padding: 8px; text-align: {align}; white-space: nowrap; cursor: pointer; user-select: none;",
        if sticky_left.is_some() { 1100 } else { 1000 }
    );
    if let Some(width) = min_width {
        style.push_str(&format!(" min-width: {width}px;"));
    }
    if let Some(left) = sticky_left {
        style.push_str(&format!(" left: {left}px;"));
    }
    style
}

pub fn body_cell_style(align: &str, color: &str, sticky_left: Option<u32>) -> String {
    let mut style = format!(
        "padding: 8px; text-align: {align}; border-bottom: 1px solid rgba(224, 224, 224, 1); font-weight: 450;"
    );
    if !color.is_empty() {
        style.push_str(&format!(" color: {color};"));
    }
    if let Some(left) = sticky_left {
        style.push_str(&format!(
            " position: sticky; left: {left}px; z-index: 1000; background-color: #fff;"
        ));
    }
    style
}

pub fn empty_rows_style(empty_rows: usize) -> String {
    format!("height: {}px;", EMPTY_ROW_HEIGHT_PX * empty_rows)
}

/// Hidden from sight, still read by screen readers.
pub fn visually_hidden_style() -> &'static str {
    "border: 0; clip: rect(0 0 0 0); height: 1px; margin: -1px; overflow: hidden; padding: 0; position: absolute; white-space: nowrap; width: 1px;"
}

pub fn chip_style(selected: bool) -> &'static str {
    if selected {
        "border: none; border-radius: 16px; padding: 6px 14px; background: #1976d2; color: #fff; cursor: pointer;"
    } else {
        "border: none; border-radius: 16px; padding: 6px 14px; background: #e0e0e0; color: #222; cursor: pointer;"
    }
}
