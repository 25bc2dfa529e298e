use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey(pub String);

impl SortKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey(value.to_string())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey(value)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Value for the `aria-sort` attribute of the active header.
    pub fn aria_label(self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<SortKey>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageState {
    /// A page size of zero is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// How a column's values are turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    /// Image, name and upper-cased symbol.
    Name,
    Currency { decimals: usize },
    Percent,
    /// Whole units followed by the coin symbol.
    Supply,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadCell {
    pub id: &'static str,
    pub label: &'static str,
    pub numeric: bool,
    pub min_width: Option<u32>,
    pub sticky_left: Option<u32>,
    pub format: CellFormat,
}

impl HeadCell {
    pub fn new(id: &'static str, label: &'static str, format: CellFormat) -> Self {
        Self {
            id,
            label,
            numeric: !matches!(format, CellFormat::Name | CellFormat::Plain),
            min_width: None,
            sticky_left: None,
            format,
        }
    }

    pub fn numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn sticky_left(mut self, left: u32) -> Self {
        self.sticky_left = Some(left);
        self
    }
}

/// Everything that differs between two tables built on the same view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub head_cells: Vec<HeadCell>,
    pub rank_field: SortKey,
    pub page_size: usize,
    pub search_fields: Vec<&'static str>,
}
