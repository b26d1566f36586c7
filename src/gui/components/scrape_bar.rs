// src/gui/components/scrape_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Character:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.character_text)
                .desired_width(220.0)
                .hint_text("e.g. Piper Wright"),
        );
        let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui.add_enabled(!app.running, egui::Button::new("SCRAPE")).clicked();
        if (clicked || enter) && !app.running {
            let ctx = ui.ctx().clone();
            actions::start_scrape(app, &ctx);
        }

        if app.running {
            ui.add(egui::Spinner::new());
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
