// src/gui/actions/load.rs
use crate::{
    core::sanitize::display_name,
    corpus,
    file,
    gui::app::App,
    store,
};

/// Load a listed file into the table and chart views.
pub fn load_file(app: &mut App, file_name: &str) {
    let Ok(stored) = store::find(&app.files, file_name).cloned() else {
        log::warn!("UI: {file_name} is not in the listing");
        app.status(format!("Unknown file: {file_name}"));
        return;
    };

    let table = match store::load_table(&stored.path) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Load: {}: {e}", stored.path.display());
            app.status(format!("Error: {e}"));
            return;
        }
    };

    // The table is still worth showing when the chart can't be built
    let name = display_name(&stored.file_name);
    let status = match corpus::from_table(&name, &table, &app.state.options.analyze, &app.analyzer) {
        Ok(c) => {
            app.corpus = Some(c);
            format!("Loaded {} ({} rows)", stored.label, table.nrows())
        }
        Err(e) => {
            log::warn!("Load: no chart for {}: {e}", stored.file_name);
            app.corpus = None;
            format!("Loaded {} (no chart: {e})", stored.label)
        }
    };

    log::info!("Load: {} ({} cols × {} rows)", stored.file_name, table.ncols(), table.nrows());
    app.table = Some(table);
    app.state.gui.selected_file = Some(stored.file_name);
    app.status(status);
}

pub fn open_store_folder(app: &App) {
    let dir = app.store_dir();
    if let Err(e) = file::ensure_directory(&dir) {
        app.status(format!("Error: {e}"));
        return;
    }
    match file::open_in_system(&dir.to_string_lossy()) {
        Ok(()) => log::info!("UI: opened {}", dir.display()),
        Err(e) => {
            log::error!("UI: {e}");
            app.status(e);
        }
    }
}
