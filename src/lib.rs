// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chart;
pub mod cli;
pub mod config;
pub mod csv;
pub mod file;
pub mod gui;
pub mod net;
pub mod progress;
pub mod scrape;
