// src/gui/app.rs
use std::{error::Error, path::{Path, PathBuf}};

use eframe::egui;

use crate::{
    config::{self, consts::SETTINGS_FILE, Settings},
    worker::{self, Cmd, CycleReport, WorkerEvent, WorkerHandle},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Twitch Plus Goal Scraper",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub settings: Settings,

    // save-location text field UX (we map this <-> settings.save_location)
    pub save_path_text: String,
    pub save_path_dirty: bool,

    // background worker (owns the browser session)
    worker: WorkerHandle,
    pub running: bool,
    pub stopping: bool,

    // status line + last cycle result for display
    pub status: String,
    pub last_result: String,
}

impl App {
    pub fn new(ctx: &egui::Context) -> Self {
        let settings = config::settings::load(Path::new(SETTINGS_FILE));
        let save_path_text = settings.save_location.to_string_lossy().into_owned();

        logf!(
            "Init: channel={:?} interval={}s save={}",
            settings.channel,
            settings.interval,
            settings.save_location.display()
        );

        Self {
            settings,
            save_path_text,
            save_path_dirty: false,
            worker: worker::spawn(ctx.clone()),
            running: false,
            stopping: false,
            status: s!("Idle"),
            last_result: s!("No data yet."),
        }
    }

    /* ---------- tiny helpers ---------- */

    /// Apply a dirty save-location field to settings. Text edits only take
    /// effect when an action runs, not per keystroke.
    pub fn apply_save_path(&mut self) {
        if self.save_path_dirty {
            self.settings.save_location = PathBuf::from(self.save_path_text.trim());
            self.save_path_dirty = false;
            logf!("UI: Save location → {}", self.settings.save_location.display());
        }
    }

    pub fn manual_refresh(&mut self) {
        self.apply_save_path();
        self.worker.send(Cmd::Refresh(self.settings.clone()));
    }

    pub fn toggle_auto_refresh(&mut self) {
        if self.running {
            self.stopping = true;
            self.worker.send(Cmd::Stop);
        } else {
            self.apply_save_path();
            self.running = true;
            self.worker.send(Cmd::Start(self.settings.clone()));
        }
    }

    fn drain_worker_events(&mut self) {
        while let Some(event) = self.worker.try_event() {
            match event {
                WorkerEvent::Status(msg) => self.status = msg,
                WorkerEvent::Cycle(report) => self.show_report(report),
                WorkerEvent::AutoStopped => {
                    self.running = false;
                    self.stopping = false;
                    self.status = s!("Idle");
                }
            }
        }
    }

    fn show_report(&mut self, report: CycleReport) {
        let timestamp = chrono::Local::now().format("%I:%M:%S %p");

        match (&report.goal, &report.error) {
            (Some(goal), _) => {
                let refresh_type = if report.manual { "Manual Refresh" } else { "Last Refreshed" };
                let mut text = format!("{refresh_type}: {timestamp}\n\nTitle: {}\n", goal.title);
                if let Some(label) = &goal.label {
                    text.push_str(&format!("Label: {label}\n"));
                }
                text.push_str(&format!(
                    "Progress: {}\nPercent Completed: {}%",
                    goal.progress_text(),
                    goal.percent()
                ));
                self.last_result = text;
                self.status = s!("Ready");
            }
            (None, error) => {
                let error_text = error.as_deref().unwrap_or("An unknown error occurred.");
                let refresh_source = if report.manual { "Manual" } else { "Auto" };
                self.last_result =
                    format!("Last Attempt ({refresh_source}): {timestamp}\n\n{error_text}");
                self.status = format!("Error: {error_text}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            components::settings_panel::draw(ui, self);

            ui.separator();

            components::actions_bar::draw(ui, self);

            ui.separator();

            components::results_panel::draw(ui, self);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.apply_save_path();
        if let Err(e) = config::settings::save(Path::new(SETTINGS_FILE), &self.settings) {
            loge!("Settings: Save failed: {}", e);
        }
        self.worker.send(Cmd::Quit);
    }
}
