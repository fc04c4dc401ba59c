// src/config/consts.rs

// Target page
pub const CHANNEL_URL_PREFIX: &str = "https://www.twitch.tv/";
pub const CHANNEL_URL_SUFFIX: &str = "/about";

// Desktop UA so the profile page serves the desktop DOM
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Settings
pub const SETTINGS_FILE: &str = "config.json";
pub const INTERVAL_MIN_SECS: u32 = 5;
pub const INTERVAL_MAX_SECS: u32 = 120;
pub const DEFAULT_INTERVAL_SECS: u32 = 30;

// Overlay
pub const OVERLAY_FILE: &str = "twitch_plus_goal.html";
pub const OVERLAY_REFRESH_SECS: u32 = 5;

// Browser
pub const NAV_TIMEOUT_SECS: u64 = 60;
pub const IDLE_BROWSER_TIMEOUT_SECS: u64 = 600;

/// Profile page URL for a channel name as typed by the user.
pub fn channel_url(channel: &str) -> String {
    join!(CHANNEL_URL_PREFIX, channel.trim(), CHANNEL_URL_SUFFIX)
}
