pub mod market;
pub mod row;
pub mod table;
