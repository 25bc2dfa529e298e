use crate::domain::entities::table::{CellFormat, HeadCell, SortKey, TableSchema};

pub const MARKET_CAP_RANK: &str = "market_cap_rank";
pub const NAME: &str = "name";
pub const SYMBOL: &str = "symbol";
pub const IMAGE: &str = "image";
pub const CURRENT_PRICE: &str = "current_price";
pub const PRICE_CHANGE_PERCENTAGE_24H: &str = "price_change_percentage_24h";
pub const MARKET_CAP: &str = "market_cap";
pub const TOTAL_VOLUME: &str = "total_volume";
pub const CIRCULATING_SUPPLY: &str = "circulating_supply";

pub const CATEGORY_RANK: &str = "rank";
pub const CATEGORY_MARKET_CAP_CHANGE_24H: &str = "market_cap_change_24h";
pub const CATEGORY_VOLUME_24H: &str = "volume_24h";

pub fn coins_schema(page_size: usize) -> TableSchema {
    TableSchema {
        head_cells: vec![
            HeadCell::new(MARKET_CAP_RANK, "#", CellFormat::Plain)
                .numeric(true)
                .sticky_left(0),
            HeadCell::new(NAME, "Name", CellFormat::Name)
                .min_width(170)
                .sticky_left(60),
            HeadCell::new(CURRENT_PRICE, "Price", CellFormat::Currency { decimals: 2 }),
            HeadCell::new(PRICE_CHANGE_PERCENTAGE_24H, "24h %", CellFormat::Percent)
                .min_width(100),
            HeadCell::new(MARKET_CAP, "Market Cap", CellFormat::Currency { decimals: 0 })
                .min_width(170),
            HeadCell::new(TOTAL_VOLUME, "Total Volume", CellFormat::Currency { decimals: 0 })
                .min_width(170),
            HeadCell::new(CIRCULATING_SUPPLY, "Circulating Supply", CellFormat::Supply)
                .min_width(170),
        ],
        rank_field: SortKey::from(MARKET_CAP_RANK),
        page_size,
        search_fields: vec![NAME, SYMBOL],
    }
}

pub fn categories_schema(page_size: usize) -> TableSchema {
    TableSchema {
        head_cells: vec![
            HeadCell::new(CATEGORY_RANK, "#", CellFormat::Plain)
                .numeric(true)
                .sticky_left(0),
            HeadCell::new(NAME, "Category", CellFormat::Plain)
                .min_width(220)
                .sticky_left(60),
            HeadCell::new(MARKET_CAP, "Market Cap", CellFormat::Currency { decimals: 0 })
                .min_width(170),
            HeadCell::new(CATEGORY_MARKET_CAP_CHANGE_24H, "24h %", CellFormat::Percent)
                .min_width(100),
            HeadCell::new(CATEGORY_VOLUME_24H, "24h Volume", CellFormat::Currency { decimals: 0 })
                .min_width(170),
        ],
        rank_field: SortKey::from(CATEGORY_RANK),
        page_size,
        search_fields: vec![NAME],
    }
}
