// src/config/settings.rs
use std::{env, fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use super::consts::{DEFAULT_INTERVAL_SECS, INTERVAL_MAX_SECS, INTERVAL_MIN_SECS};

/// Persisted user settings, one flat JSON object on disk.
/// Unknown keys are ignored; missing keys fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub channel: String,
    pub interval: u32,
    pub save_location: PathBuf,
    pub show_percentage: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            channel: s!(),
            interval: DEFAULT_INTERVAL_SECS,
            save_location: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            show_percentage: true,
        }
    }
}

impl Settings {
    /// Interval as actually used: the slider range is authoritative
    /// even if the file on disk says otherwise.
    pub fn clamped_interval(&self) -> u32 {
        self.interval.clamp(INTERVAL_MIN_SECS, INTERVAL_MAX_SECS)
    }
}

/// Load settings, falling back to defaults on any problem.
/// A half-broken config file should never keep the app from starting.
pub fn load(path: &Path) -> Settings {
    if !path.exists() {
        logd!("Settings: {} missing, using defaults", path.display());
        return Settings::default();
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            loge!("Settings: read failed {}: {}", path.display(), e);
            return Settings::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            loge!("Settings: parse failed {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

pub fn save(path: &Path, cfg: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(cfg)?;
    fs::write(path, text)?;
    Ok(())
}
