// src/params.rs
use std::path::PathBuf;

use crate::config::consts::DEFAULT_INTERVAL_SECS;

pub const LOG_FILE: &str = "tpg_debug.log";

/// CLI invocation parameters. GUI runs entirely off `config::Settings`.
#[derive(Clone)]
pub struct Params {
    pub channel: String,            // twitch channel name (login, not URL)
    pub interval: u32,              // seconds between cycles in watch mode
    pub out_dir: Option<PathBuf>,   // overlay output directory
    pub show_percentage: bool,      // append "(N%)" to the overlay text
    pub watch: bool,                // loop forever vs one cycle
}

impl Params {
    pub fn new() -> Self {
        Self {
            channel: s!(),
            interval: DEFAULT_INTERVAL_SECS,
            out_dir: None,
            show_percentage: true,
            watch: false,
        }
    }

    /// Output directory, current dir when none was given.
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
