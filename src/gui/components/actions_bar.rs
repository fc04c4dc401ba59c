// src/gui/components/actions_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!app.stopping, egui::Button::new("Manual Refresh"))
            .clicked()
        {
            logf!("UI: Manual refresh");
            app.manual_refresh();
        }

        let toggle_text = if app.stopping {
            "Stopping..."
        } else if app.running {
            "Stop Auto-Refresh"
        } else {
            "Start Auto-Refresh"
        };

        if ui
            .add_enabled(!app.stopping, egui::Button::new(toggle_text))
            .clicked()
        {
            logf!("UI: Toggle auto-refresh (running={})", app.running);
            app.toggle_auto_refresh();
        }

        ui.label(format!("Status: {}", app.status));
    });
}
