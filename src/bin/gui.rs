// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use log::LevelFilter;
use wiki_dialogue::{
    config::{AppOptions, consts::LOG_FILE, state::AppState},
    gui,
    logging::{self, LogTarget},
};

fn main() {
    let options = match AppOptions::load_or_default(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config ignored: {e}");
            AppOptions::default()
        }
    };

    let log_path = options.serve.store_dir.join(LOG_FILE);
    logging::init(LevelFilter::Info, LogTarget::File(&log_path));

    let state = AppState { options, ..Default::default() };
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, native) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
