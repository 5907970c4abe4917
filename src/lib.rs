pub mod catalog;
pub mod config;
pub mod loader;
pub mod logging;
pub mod ui;
