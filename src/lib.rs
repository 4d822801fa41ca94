// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod scrape;
pub mod stats;
pub mod store;
pub mod widget;
