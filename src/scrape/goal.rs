// src/scrape/goal.rs
use std::error::Error;

use serde::Deserialize;

use super::BrowserSession;
use crate::config::consts::channel_url;
use crate::core::parse::{group_thousands, parse_progress, percent_complete};

// In-page probe. Walks the about-section goal widgets for the one titled
// "Plus Goal" and hands back its text content as a JSON string (strings
// survive the CDP result envelope; structured objects do not). No widget,
// no container or no progress text → null.
const GOAL_SCRIPT: &str = r#"
(() => {
  const container = document.querySelector('.about-section__actions');
  if (!container) return null;
  for (const widget of container.querySelectorAll(':scope > div')) {
    const title = widget.querySelector('h3');
    if (!title || title.textContent.trim() !== 'Plus Goal') continue;
    const progress = widget.querySelector('strong');
    if (!progress) return null;
    const label = widget.querySelector('span');
    return JSON.stringify({
      title: title.textContent.trim(),
      label: label ? label.textContent.trim() : null,
      progress: progress.textContent.trim(),
    });
  }
  return null;
})()
"#;

/// Shape produced by GOAL_SCRIPT.
#[derive(Deserialize)]
struct RawWidget {
    title: String,
    label: Option<String>,
    progress: String,
}

/// One scraped goal reading.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalSnapshot {
    pub title: String,
    pub label: Option<String>,
    pub current: u64,
    pub total: u64,
}

impl GoalSnapshot {
    pub fn percent(&self) -> u64 {
        percent_complete(self.current, self.total)
    }

    /// Display form: "1,234 / 10,000"
    pub fn progress_text(&self) -> String {
        join!(group_thousands(self.current), " / ", &group_thousands(self.total))
    }
}

/// Bring the session to the channel's profile page and probe for the widget.
/// Ok(None) means the page loaded but carries no (parseable) Plus Goal.
pub fn fetch_goal(
    session: &mut BrowserSession,
    channel: &str,
) -> Result<Option<GoalSnapshot>, Box<dyn Error>> {
    let url = channel_url(channel);
    session.goto_or_reload(&url)?;

    let value = match session.evaluate(GOAL_SCRIPT)? {
        Some(v) => v,
        None => {
            logd!("Goal: No Plus Goal widget on {}", url);
            return Ok(None);
        }
    };

    let raw: RawWidget = match value.as_str() {
        Some(text) => serde_json::from_str(text)?,
        None => return Err(s!("Unexpected script result shape").into()),
    };

    match parse_progress(&raw.progress) {
        Some((current, total)) => {
            logf!("Goal: {}: {} / {}", raw.title, current, total);
            Ok(Some(GoalSnapshot {
                title: raw.title,
                label: raw.label,
                current,
                total,
            }))
        }
        None => {
            logd!("Goal: Unparseable progress text {:?}", raw.progress);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_formats_progress_with_commas() {
        let snap = GoalSnapshot {
            title: s!("Plus Goal"),
            label: None,
            current: 1234,
            total: 10000,
        };
        assert_eq!(snap.progress_text(), "1,234 / 10,000");
        assert_eq!(snap.percent(), 12);
    }
}
