// src/overlay.rs
//
// Browser-source output: one small HTML document, rewritten every cycle,
// polled by the broadcast software. Success gets the styled goal line,
// anything else gets a plain notice. Both self-refresh client-side.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{OVERLAY_FILE, OVERLAY_REFRESH_SECS};
use crate::scrape::GoalSnapshot;

/// The line shown in the overlay: "title: current / total" plus " (N%)"
/// when percentages are enabled.
pub fn goal_line(goal: &GoalSnapshot, show_percentage: bool) -> String {
    let mut text = join!(&goal.title, ": ", &goal.progress_text());
    if show_percentage {
        text.push_str(&format!(" ({}%)", goal.percent()));
    }
    text
}

pub fn render_goal(goal: &GoalSnapshot, show_percentage: bool) -> String {
    let full_text = goal_line(goal, show_percentage);
    format!(
        r#"<html>
<head>
    <meta http-equiv="refresh" content="{refresh}">
    <style>
        body {{
            font-family: Arial, sans-serif; background-color: transparent;
            color: #FFFFFF; text-shadow: 2px 2px 4px #000000;
            margin: 0; padding: 10px; overflow: hidden; white-space: nowrap;
        }}
        .container {{
            display: flex; align-items: center;
            background-color: rgba(0, 0, 0, 0.5);
            padding: 10px 15px; border-radius: 10px;
            width: fit-content;
        }}
        h3 {{ margin: 0; }}
    </style>
</head>
<body>
    <div class="container">
        <h3>{full_text}</h3>
    </div>
</body>
</html>
"#,
        refresh = OVERLAY_REFRESH_SECS,
    )
}

/// Fallback document for failed cycles. `message` is the error text,
/// or the waiting notice when there is nothing more specific to say.
pub fn render_message(message: &str) -> String {
    format!(
        r#"<html><head><meta http-equiv="refresh" content="{refresh}"></head>
<body style="font-family: Arial, sans-serif; color: white;"><p>{message}</p></body></html>
"#,
        refresh = OVERLAY_REFRESH_SECS,
    )
}

/// Write the overlay document into `save_location`, creating the directory
/// if needed. Returns the final path.
pub fn write_overlay(save_location: &Path, html: &str) -> Result<PathBuf, Box<dyn Error>> {
    if !save_location.as_os_str().is_empty() {
        ensure_directory(save_location)?;
    }
    let path = save_location.join(OVERLAY_FILE);
    fs::write(&path, html)?;
    Ok(path)
}

fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
