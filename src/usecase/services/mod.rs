pub mod market_service;
pub mod search;
pub mod sort_engine;
pub mod table_view;
