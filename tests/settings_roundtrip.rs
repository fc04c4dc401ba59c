// tests/settings_roundtrip.rs
//
// Settings persistence: exact round-trips and lenient loading.
//
use std::fs;
use std::path::PathBuf;

use tpg_scrape::config::settings::{self, Settings};

#[test]
fn save_then_load_reproduces_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let cfg = Settings {
        channel: "somestreamer".into(),
        interval: 45,
        save_location: PathBuf::from("/tmp/overlays"),
        show_percentage: false,
    };

    settings::save(&path, &cfg).unwrap();
    assert_eq!(settings::load(&path), cfg);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = settings::load(&dir.path().join("nope.json"));
    assert_eq!(loaded, Settings::default());
}

#[test]
fn corrupt_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json at all {{{").unwrap();
    assert_eq!(settings::load(&path), Settings::default());
}

#[test]
fn unknown_keys_are_ignored_and_missing_keys_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"channel": "abc", "theme": "dark"}"#).unwrap();

    let loaded = settings::load(&path);
    assert_eq!(loaded.channel, "abc");
    assert_eq!(loaded.interval, Settings::default().interval);
    assert!(loaded.show_percentage);
}

#[test]
fn interval_is_clamped_on_use() {
    let mut cfg = Settings::default();

    cfg.interval = 1;
    assert_eq!(cfg.clamped_interval(), 5);

    cfg.interval = 500;
    assert_eq!(cfg.clamped_interval(), 120);

    cfg.interval = 60;
    assert_eq!(cfg.clamped_interval(), 60);
}

#[test]
fn save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    settings::save(&path, &Settings::default()).unwrap();
    assert!(path.exists());
}
