// src/gui/components/chart_view.rs
//
// The same two charts the web page shows, painted with egui: the selected
// word category on top, sentiments below.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{chart::CATEGORIES, freq::TokenFrequencyTable, gui::app::App};

const SENTIMENT_COLOR: Color32 = Color32::from_rgb(0x63, 0x6e, 0xfa);
const LABEL_H: f32 = 34.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(corpus) = app.corpus.as_ref() else {
        ui.weak("No chart for this file.");
        return;
    };
    let top_n = app.state.options.analyze.top_n;

    ui.horizontal(|ui| {
        for (ix, (_, label, _)) in CATEGORIES.iter().enumerate() {
            let selected = app.state.gui.chart_category == ix;
            if ui.selectable_label(selected, *label).clicked() && !selected {
                log::debug!("UI: Chart category → {label}");
                app.state.gui.chart_category = ix;
            }
        }
    });

    let ix = app.state.gui.chart_category.min(CATEGORIES.len() - 1);
    let (_, _, hex) = CATEGORIES[ix];
    let color = hex_color(hex).unwrap_or(Color32::GRAY);

    let h = ((ui.available_height() - 2.0 * ui.spacing().item_spacing.y) / 2.0).max(120.0);

    ui.strong(format!("{}'s Most Common Words", corpus.name));
    let words = TokenFrequencyTable::from_tokens(corpus.category(ix)).top(top_n);
    bars(ui, &words, color, h - 20.0);

    ui.strong("Most Common Sentiments");
    let sentiments = TokenFrequencyTable::from_tokens(&corpus.sentiment).top(top_n);
    bars(ui, &sentiments, SENTIMENT_COLOR, h - 20.0);
}

fn bars(ui: &mut egui::Ui, data: &[(String, usize)], color: Color32, height: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());

    let plot = Rect::from_min_max(rect.min + Vec2::new(8.0, 16.0), rect.max - Vec2::new(8.0, LABEL_H));
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);

    if data.is_empty() {
        painter.text(plot.center(), Align2::CENTER_CENTER, "no data", FontId::proportional(13.0), text_color);
        return;
    }

    let max = data.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1) as f32;
    let slot = plot.width() / data.len() as f32;
    let bar_w = slot * 0.7;

    for (i, (word, n)) in data.iter().enumerate() {
        let x0 = plot.left() + slot * i as f32 + (slot - bar_w) / 2.0;
        let bar_h = plot.height() * (*n as f32 / max);
        let bar = Rect::from_min_max(Pos2::new(x0, plot.bottom() - bar_h), Pos2::new(x0 + bar_w, plot.bottom()));
        painter.rect_filled(bar, 2.0, color);

        let cx = x0 + bar_w / 2.0;
        painter.text(Pos2::new(cx, bar.top() - 2.0), Align2::CENTER_BOTTOM, n.to_string(), FontId::proportional(11.0), text_color);
        painter.text(Pos2::new(cx, plot.bottom() + 4.0), Align2::CENTER_TOP, word, FontId::proportional(12.0), text_color);
    }
}

/// `#rrggbb` → colour.
pub fn hex_color(hex: &str) -> Option<Color32> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
    Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_colours() {
        assert_eq!(hex_color("#6afcb8"), Some(Color32::from_rgb(0x6a, 0xfc, 0xb8)));
        assert_eq!(hex_color("6afcb8"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }
}
