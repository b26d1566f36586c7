// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load_file, scrape, ...}.

mod load;    // src/gui/actions/load.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use load::{load_file, open_store_folder};
pub use scrape::{poll_scrape, start_scrape};
