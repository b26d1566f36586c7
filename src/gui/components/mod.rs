// src/gui/components/mod.rs
pub mod chart_view;
pub mod data_table;
pub mod file_list;
pub mod scrape_bar;
pub mod tabs;
