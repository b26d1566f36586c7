// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex, mpsc::Receiver},
};

use eframe::egui;

use crate::{
    config::state::{AppState, View},
    corpus::CharacterCorpus,
    nlp::Analyzer,
    store::{self, StoredFile},
    table::DialogueTable,
};

use super::{actions, components};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Wiki Dialogue",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // storage listing, sorted by label
    pub files: Vec<StoredFile>,

    // currently loaded file
    pub table: Option<DialogueTable>,
    pub corpus: Option<CharacterCorpus>,
    pub analyzer: Analyzer,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub scrape_rx: Option<Receiver<crate::error::Result<PathBuf>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            files: Vec::new(),
            table: None,
            corpus: None,
            analyzer: Analyzer::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            scrape_rx: None,
        };

        app.refresh_files();

        // Open the default file when it is there
        let default = app.state.options.serve.default_file.clone();
        if app.files.iter().any(|f| f.file_name == default) {
            actions::load_file(&mut app, &default);
        }

        log::info!("Init: {} stored file(s), window {}x{}",
            app.files.len(), app.state.gui.window_w, app.state.gui.window_h);
        app
    }

    pub fn store_dir(&self) -> PathBuf {
        self.state.options.serve.store_dir.clone()
    }

    pub fn refresh_files(&mut self) {
        match store::list_stored(&self.store_dir()) {
            Ok(files) => self.files = files,
            Err(e) => {
                log::debug!("Store: listing failed: {e}");
                self.files.clear();
            }
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        let mut s = self.status.lock().unwrap_or_else(|p| p.into_inner());
        *s = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);

        egui::TopBottomPanel::top("scrape_bar").show(ctx, |ui| {
            components::scrape_bar::draw(ui, self);
        });

        egui::SidePanel::left("files")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                components::file_list::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.view {
                View::Table => components::data_table::draw(ui, self),
                View::Chart => components::chart_view::draw(ui, self),
            }
        });

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
