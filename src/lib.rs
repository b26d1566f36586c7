// src/lib.rs
#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod chart;
pub mod corpus;
pub mod csv;
pub mod error;
pub mod file;
pub mod freq;
pub mod gui;
pub mod logging;
pub mod nlp;
pub mod progress;
pub mod scrape;
pub mod server;
pub mod store;
pub mod table;
