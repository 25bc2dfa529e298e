pub mod import;
pub mod snapshot;
