// src/gui/components/tabs.rs
//
// Table / Chart switch for the central panel.

use eframe::egui;

use crate::config::state::View;
use crate::gui::app::App;

const VIEWS: [(View, &str); 2] = [(View::Table, "Table"), (View::Chart, "Chart")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (view, title) in VIEWS {
            let selected = app.state.gui.view == view;
            if ui.selectable_label(selected, title).clicked() && !selected {
                log::debug!("UI: Tab switch {:?} → {:?}", app.state.gui.view, view);
                app.state.gui.view = view;
            }
        }

        if let Some(name) = &app.state.gui.selected_file {
            ui.separator();
            ui.weak(name);
        }
    });
}
