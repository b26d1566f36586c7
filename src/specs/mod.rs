// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of where the ground truth lives in the wiki's HTML.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into a `DialogueTable`.
//! - **Selector choice** (which `<th>` cells name the columns, which `<td>`
//!   cells belong to which logical column, which cells are not dialogue).
//!
//! ## What does **not** live here
//! - **Persistence** (`store::save_table`) and output naming (`config::options`).
//! - **Front-end concerns** (status lines, CLI messages).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::scrape_to_file → core::net::http_get()
//!                                   → specs::dialogue::extract_table() → DialogueTable
//!                                   → store::save_table (outside of specs)
//! ```
//!
//! ## Testing notes
//! Extraction is a pure function of the page text, so it is tested offline
//! against inline fixtures.
pub mod dialogue;
