// src/gui/components/data_table.rs
//
// Draws the loaded DialogueTable. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.as_ref() else {
        ui.weak("Pick a stored file on the left, or scrape a character.");
        return;
    };
    let cols = table.ncols();
    if cols == 0 {
        ui.weak("Empty table");
        return;
    }

    // Dialogue text gets the room; the rest stay narrow
    let widths: Vec<f32> = table
        .columns()
        .iter()
        .map(|c| if c.name == app.state.options.analyze.response_column { 420.0 } else { 160.0 })
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h)
                .id_salt(("dialogue_table", app.state.gui.selected_file.as_deref().unwrap_or("")));
            for w in &widths {
                builder = builder.column(Column::initial(*w).resizable(true).clip(true).at_least(30.0));
            }

            builder
                .header(24.0, |mut header| {
                    for c in table.columns() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(&c.name).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.nrows(), |mut row| {
                        let ix = row.index();
                        for c in table.columns() {
                            let cell = c.cells.get(ix).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.label(cell).on_hover_text(cell);
                            });
                        }
                    });
                });
        });
}
