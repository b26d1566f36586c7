// src/scrape.rs
use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::net,
    error::Result,
    progress::Progress,
    specs::dialogue,
    store,
    table::DialogueTable,
};

pub const CREATED_MSG: &str = "A new dialogue file has been created!";
pub const FAILED_MSG: &str = "A new dialogue file could not be created. Exiting program.";

/// Fetch and extract one character's table. Nothing is written.
pub fn create_table(
    character: &str,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<DialogueTable> {
    create_table_with(character, opts, net::http_get, progress)
}

/// Same as `create_table` with the page source injected (tests, fixtures).
pub fn create_table_with<F>(
    character: &str,
    opts: &ScrapeOptions,
    fetch: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DialogueTable>
where
    F: FnOnce(&str) -> Result<String>,
{
    let url = opts.page_url(character);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {url}"));
    }

    let html_doc = fetch(&url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Fetched page");
    }

    let table = dialogue::extract_table(&html_doc)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Extracted table");
    }
    log::info!(
        "Scrape: {character} → {} column(s) × {} row(s)",
        table.ncols(),
        table.nrows()
    );
    Ok(table)
}

/// Fetch, extract and save `{character}_dialogue.csv` into `opts.out_dir`.
/// The first error aborts; nothing is written unless extraction succeeded.
pub fn scrape_to_file(
    character: &str,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<PathBuf> {
    scrape_to_file_with(character, opts, net::http_get, progress)
}

pub fn scrape_to_file_with<F>(
    character: &str,
    opts: &ScrapeOptions,
    fetch: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PathBuf>
where
    F: FnOnce(&str) -> Result<String>,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
    }

    // Reborrow with a shorter object lifetime so `progress` stays usable below.
    let inner = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
    let result = create_table_with(character, opts, fetch, inner)
        .and_then(|table| store::save_table(&opts.out_path(character), &table));

    if let Some(p) = progress.as_deref_mut() {
        if result.is_ok() {
            p.step_done("Saved file");
        }
        p.finish();
    }
    result
}
