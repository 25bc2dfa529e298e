use crate::domain::entities::market::SYMBOL;
use crate::domain::entities::row::{FieldValue, RowRecord};
use crate::domain::entities::table::{CellFormat, HeadCell};

pub const MISSING_VALUE: &str = "-";
pub const NEGATIVE_CHANGE_COLOR: &str = "#ea3943";
pub const POSITIVE_CHANGE_COLOR: &str = "#16c784";

pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = text.chars().all(|ch| ch == '0' || ch == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_currency(value: f64, decimals: usize) -> String {
    let text = format_number_with_commas(value, decimals);
    match text.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${text}"),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn change_color(value: f64) -> &'static str {
    if value < 0.0 {
        NEGATIVE_CHANGE_COLOR
    } else {
        POSITIVE_CHANGE_COLOR
    }
}

pub fn symbol_label(row: &RowRecord) -> String {
    row.text(SYMBOL).unwrap_or_default().to_uppercase()
}

/// Display text for one cell of `row` under `cell`.
pub fn format_cell(cell: &HeadCell, row: &RowRecord) -> String {
    let Some(value) = row.get(cell.id) else {
        return MISSING_VALUE.to_string();
    };

    match (cell.format, value) {
        (CellFormat::Currency { decimals }, FieldValue::Number(number)) => {
            format_currency(*number, decimals)
        }
        (CellFormat::Percent, FieldValue::Number(number)) => format_percent(*number),
        (CellFormat::Supply, FieldValue::Number(number)) => {
            let symbol = symbol_label(row);
            let amount = format_number_with_commas(*number, 0);
            if symbol.is_empty() {
                amount
            } else {
                format!("{amount} {symbol}")
            }
        }
        (_, FieldValue::Number(number)) if number.fract() == 0.0 && number.abs() < 1e15 => {
            format!("{}", *number as i64)
        }
        (_, value) => value.to_string(),
    }
}

/// Inline color for cells whose sign matters, empty otherwise.
pub fn cell_color(cell: &HeadCell, row: &RowRecord) -> &'static str {
    match (cell.format, row.number(cell.id)) {
        (CellFormat::Percent, Some(value)) => change_color(value),
        _ => "",
    }
}
