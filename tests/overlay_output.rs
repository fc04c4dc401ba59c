// tests/overlay_output.rs
//
// Browser-source output: formatted text, templates, file writing.
//
use tpg_scrape::overlay;
use tpg_scrape::scrape::GoalSnapshot;

fn goal() -> GoalSnapshot {
    GoalSnapshot {
        title: "Plus Goal".into(),
        label: Some("subscribers".into()),
        current: 1234,
        total: 10000,
    }
}

#[test]
fn goal_line_with_percentage() {
    assert_eq!(overlay::goal_line(&goal(), true), "Plus Goal: 1,234 / 10,000 (12%)");
}

#[test]
fn goal_line_without_percentage() {
    assert_eq!(overlay::goal_line(&goal(), false), "Plus Goal: 1,234 / 10,000");
}

#[test]
fn goal_line_zero_total_shows_zero_percent() {
    let empty = GoalSnapshot { title: "Plus Goal".into(), label: None, current: 0, total: 0 };
    assert_eq!(overlay::goal_line(&empty, true), "Plus Goal: 0 / 0 (0%)");
}

#[test]
fn goal_document_embeds_line_and_refresh() {
    let html = overlay::render_goal(&goal(), true);
    assert!(html.contains("Plus Goal: 1,234 / 10,000 (12%)"));
    assert!(html.contains(r#"http-equiv="refresh" content="5""#));
}

#[test]
fn message_document_embeds_message_and_refresh() {
    let html = overlay::render_message("Waiting for data...");
    assert!(html.contains("Waiting for data..."));
    assert!(html.contains(r#"http-equiv="refresh" content="5""#));
}

#[test]
fn write_overlay_creates_directory_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("overlays");

    let path = overlay::write_overlay(&target, "<html></html>").unwrap();
    assert_eq!(path, target.join("twitch_plus_goal.html"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
}

#[test]
fn write_overlay_rejects_file_where_directory_expected() {
    let dir = tempfile::tempdir().unwrap();
    let clash = dir.path().join("spot");
    std::fs::write(&clash, "x").unwrap();

    assert!(overlay::write_overlay(&clash, "<html></html>").is_err());
}
