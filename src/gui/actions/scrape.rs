// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::options::ScrapeOptions,
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Kick off a scrape on a worker thread. Results come back through
/// `poll_scrape`; the worker only touches the status line.
pub fn start_scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let character = app.state.gui.character_text.trim().to_string();
    if character.is_empty() {
        app.status("Enter a character name");
        return;
    }

    // GUI scrapes land in the storage folder so they show up in the list
    let opts = ScrapeOptions {
        out_dir: app.store_dir(),
        ..app.state.options.scrape.clone()
    };

    log::info!("Scrape: Begin {character} → {}", opts.out_dir.display());

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, Some(ctx.clone()));
        let res = scrape::scrape_to_file(&character, &opts, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.scrape_rx = Some(rx);
    app.running = true;
}

pub fn poll_scrape(app: &mut App) {
    let Some(rx) = &app.scrape_rx else { return };
    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            log::error!("Scrape: worker ended without a result");
            app.scrape_rx = None;
            app.running = false;
            app.status(scrape::FAILED_MSG);
            return;
        }
    };
    app.scrape_rx = None;
    app.running = false;

    match res {
        Ok(path) => {
            log::info!("Scrape: OK → {}", path.display());
            app.refresh_files();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                let name = name.to_string();
                super::load_file(app, &name);
            }
            app.status(scrape::CREATED_MSG);
        }
        Err(e) => {
            log::error!("Scrape: Error: {e}");
            app.status(format!("{} ({e})", scrape::FAILED_MSG));
        }
    }
}
