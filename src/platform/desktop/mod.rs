pub mod dialog;
pub mod paths;
