// src/gui/components/results_panel.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Read-only multiline: &str implements TextBuffer immutably.
            ui.add(
                egui::TextEdit::multiline(&mut app.last_result.as_str())
                    .desired_width(f32::INFINITY)
                    .desired_rows(8),
            );
        });
}
