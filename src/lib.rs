pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod persist;
pub mod render;
pub mod storage;
pub mod term;
pub mod types;
pub mod ui;
pub mod utils;
