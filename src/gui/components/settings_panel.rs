// src/gui/components/settings_panel.rs
use eframe::egui;

use crate::config::consts::{INTERVAL_MAX_SECS, INTERVAL_MIN_SECS};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // The worker runs on the snapshot taken at Start; freeze edits until Stop.
    let locked = app.running || app.stopping;

    ui.add_enabled_ui(!locked, |ui| {
        ui.horizontal(|ui| {
            ui.label("Channel:");
            ui.add(
                egui::TextEdit::singleline(&mut app.settings.channel)
                    .hint_text("Enter Twitch channel name"),
            );
        });

        ui.horizontal(|ui| {
            ui.label(format!("Refresh interval: {}s", app.settings.interval));
            if ui
                .add(
                    egui::Slider::new(
                        &mut app.settings.interval,
                        INTERVAL_MIN_SECS..=INTERVAL_MAX_SECS,
                    )
                    .show_value(false),
                )
                .changed()
            {
                logd!("UI: Interval → {}s", app.settings.interval);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Save to:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.save_path_text)
                    .font(egui::TextStyle::Monospace))
                .changed()
            {
                app.save_path_dirty = true;
                logd!("UI: save_path_text changed (dirty=true) → {}", app.save_path_text);
            }
        });

        let before = app.settings.show_percentage;
        ui.checkbox(&mut app.settings.show_percentage, "Show percentage in overlay");
        if app.settings.show_percentage != before {
            logf!("UI: show_percentage → {}", app.settings.show_percentage);
        }
    });
}
