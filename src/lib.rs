pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod queries;
pub mod ui;
