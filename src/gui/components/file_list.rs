// src/gui/components/file_list.rs
//
// Left panel: stored files by label. Clicking one loads it.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Stored");

    ui.horizontal(|ui| {
        if ui.button("Refresh").clicked() {
            app.refresh_files();
            log::debug!("UI: Refreshed listing ({} files)", app.files.len());
        }
        if ui.button("Open folder").clicked() {
            actions::open_store_folder(app);
        }
    });
    ui.separator();

    if app.files.is_empty() {
        ui.weak(format!("No .csv files in {}", app.store_dir().display()));
        return;
    }

    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical().id_salt("file_list").show(ui, |ui| {
        for f in &app.files {
            let selected = app.state.gui.selected_file.as_deref() == Some(f.file_name.as_str());
            let resp = ui.selectable_label(selected, &f.label).on_hover_text(&f.file_name);
            if resp.clicked() && !selected {
                clicked = Some(f.file_name.clone());
            }
        }
    });

    if let Some(name) = clicked {
        log::info!("UI: Select {name}");
        actions::load_file(app, &name);
    }
}
