pub mod format;
pub mod state;
pub mod styles;
pub mod table_head;
