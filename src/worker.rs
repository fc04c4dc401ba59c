// src/worker.rs
//
// One long-lived background thread owns the browser session and runs all
// scrape cycles, manual and scheduled. The GUI talks to it over a command
// channel and drains events once per frame; the worker requests a repaint
// after each send so results show up without user input.

use std::{
    error::Error,
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::Settings,
    overlay,
    scrape::{self, BrowserSession, GoalSnapshot},
};

pub enum Cmd {
    /// One cycle now, outside any schedule.
    Refresh(Settings),
    /// Begin auto-refresh: first cycle immediately, then one per interval.
    Start(Settings),
    /// End auto-refresh. The browser session stays warm.
    Stop,
    /// Tear everything down; the thread exits.
    Quit,
}

pub enum WorkerEvent {
    Status(String),
    Cycle(CycleReport),
    AutoStopped,
}

/// Outcome of one scrape-and-publish cycle, successful or not.
pub struct CycleReport {
    pub goal: Option<GoalSnapshot>,
    pub error: Option<String>,
    pub manual: bool,
}

pub struct WorkerHandle {
    tx: Sender<Cmd>,
    events: Receiver<WorkerEvent>,
}

impl WorkerHandle {
    pub fn send(&self, cmd: Cmd) {
        let _ = self.tx.send(cmd);
    }

    pub fn try_event(&self) -> Option<WorkerEvent> {
        self.events.try_recv().ok()
    }
}

pub fn spawn(ctx: egui::Context) -> WorkerHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    thread::spawn(move || {
        run(cmd_rx, event_tx, ctx);
        logf!("Worker: Thread exit");
    });

    WorkerHandle { tx: cmd_tx, events: event_rx }
}

fn run(cmds: Receiver<Cmd>, events: Sender<WorkerEvent>, ctx: egui::Context) {
    let mut worker = Worker { events, ctx, session: None };

    // Some(settings) while auto-refresh is active.
    let mut auto: Option<Settings> = None;
    let mut next_tick = Instant::now();

    loop {
        // Idle: block on the next command. Auto: wait at most until the
        // next tick, so Stop and manual Refresh interrupt the countdown.
        let cmd = if auto.is_some() {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match cmds.recv_timeout(wait) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None, // tick due
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match cmds.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        };

        match cmd {
            Some(Cmd::Refresh(settings)) => {
                worker.cycle(&settings, true);
            }
            Some(Cmd::Start(settings)) => {
                logf!("Worker: Auto-refresh start, interval={}s", settings.clamped_interval());
                worker.cycle(&settings, false);
                if settings.channel.trim().is_empty() {
                    // Nothing to schedule; mirror the cycle's refusal.
                    worker.send(WorkerEvent::AutoStopped);
                } else {
                    next_tick = Instant::now()
                        + Duration::from_secs(settings.clamped_interval() as u64);
                    auto = Some(settings);
                }
            }
            Some(Cmd::Stop) => {
                logf!("Worker: Auto-refresh stop");
                auto = None;
                worker.send(WorkerEvent::AutoStopped);
            }
            Some(Cmd::Quit) => break,
            None => {
                if let Some(settings) = auto.clone() {
                    worker.cycle(&settings, false);
                    next_tick = Instant::now()
                        + Duration::from_secs(settings.clamped_interval() as u64);
                }
            }
        }
    }
}

struct Worker {
    events: Sender<WorkerEvent>,
    ctx: egui::Context,
    session: Option<BrowserSession>,
}

impl Worker {
    fn send(&self, event: WorkerEvent) {
        let _ = self.events.send(event);
        self.ctx.request_repaint();
    }

    fn status<T: Into<String>>(&self, msg: T) {
        self.send(WorkerEvent::Status(msg.into()));
    }

    /// One full scrape-and-publish cycle. Never fails out of the loop;
    /// every outcome is reported and written to the overlay, and the next
    /// scheduled cycle retries from scratch.
    fn cycle(&mut self, settings: &Settings, manual: bool) {
        let channel = settings.channel.trim().to_string();

        let report = if channel.is_empty() {
            CycleReport {
                goal: None,
                error: Some(s!("Please enter a channel name.")),
                manual,
            }
        } else {
            let kind = if manual { "Manual Refresh" } else { "Auto-Refresh" };
            self.status(format!("{kind}: Scraping {channel}..."));

            match self.fetch_with_retry(&channel) {
                Ok(Some(goal)) => CycleReport { goal: Some(goal), error: None, manual },
                Ok(None) => CycleReport {
                    goal: None,
                    error: Some(s!("Failed to scrape data or no 'Plus Goal' widget found.")),
                    manual,
                },
                Err(e) => {
                    loge!("Worker: Cycle error: {}", e);
                    CycleReport { goal: None, error: Some(e.to_string()), manual }
                }
            }
        };

        let report = self.publish(settings, report);
        self.send(WorkerEvent::Cycle(report));
    }

    /// Scrape once; on failure drop the session, relaunch and retry once.
    fn fetch_with_retry(&mut self, channel: &str) -> Result<Option<GoalSnapshot>, Box<dyn Error>> {
        match self.try_fetch(channel) {
            Ok(found) => Ok(found),
            Err(e) => {
                loge!("Worker: Fetch failed ({}), relaunching browser", e);
                self.session = None;
                match self.try_fetch(channel) {
                    Ok(found) => Ok(found),
                    Err(e2) => {
                        // Leave no half-dead browser behind for the next tick.
                        self.session = None;
                        Err(e2)
                    }
                }
            }
        }
    }

    fn try_fetch(&mut self, channel: &str) -> Result<Option<GoalSnapshot>, Box<dyn Error>> {
        if self.session.is_none() {
            self.status("Launching browser...");
            self.session = Some(BrowserSession::launch()?);
        }
        let session = self.session.as_mut().ok_or("Browser session unavailable")?;
        scrape::fetch_goal(session, channel)
    }

    /// Write the overlay for this outcome. A write failure replaces the
    /// report's error so the user sees it in the results panel.
    fn publish(&self, settings: &Settings, mut report: CycleReport) -> CycleReport {
        let html = match &report.goal {
            Some(goal) => overlay::render_goal(goal, settings.show_percentage),
            None => {
                let msg = report.error.as_deref().unwrap_or("Waiting for data...");
                overlay::render_message(msg)
            }
        };

        match overlay::write_overlay(&settings.save_location, &html) {
            Ok(path) => logd!("Overlay: Wrote {}", path.display()),
            Err(e) => {
                loge!("Overlay: Save failed: {}", e);
                report.error = Some(format!(
                    "Error: Could not save file to {}",
                    settings.save_location.display()
                ));
            }
        }
        report
    }
}
