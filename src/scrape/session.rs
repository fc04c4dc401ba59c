// src/scrape/session.rs
use std::{error::Error, sync::Arc, time::Duration};

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::consts::{IDLE_BROWSER_TIMEOUT_SECS, NAV_TIMEOUT_SECS, USER_AGENT};

/// One headless browser plus one tab, kept alive across scrape cycles.
/// A cycle only ever reloads or navigates; relaunching is the caller's
/// failure path, not part of the normal tick.
pub struct BrowserSession {
    _browser: Browser, // owns the process; dropped → browser closes
    tab: Arc<Tab>,
    current_url: Option<String>,
}

impl BrowserSession {
    pub fn launch() -> Result<Self, Box<dyn Error>> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .idle_browser_timeout(Duration::from_secs(IDLE_BROWSER_TIMEOUT_SECS))
            .build()?;
        let browser = Browser::new(options)?;

        let tab = browser.new_tab()?;
        tab.set_default_timeout(Duration::from_secs(NAV_TIMEOUT_SECS));
        tab.set_user_agent(USER_AGENT, None, None)?;

        logf!("Browser: Launched, tab ready");
        Ok(Self { _browser: browser, tab, current_url: None })
    }

    /// Bring the tab to `url`. Same target as last cycle → plain reload;
    /// different target (user switched channels) → full navigation.
    pub fn goto_or_reload(&mut self, url: &str) -> Result<(), Box<dyn Error>> {
        if self.current_url.as_deref() == Some(url) {
            logd!("Browser: Reload {}", url);
            self.tab.reload(true, None)?;
        } else {
            logd!("Browser: Navigate {}", url);
            self.tab.navigate_to(url)?;
            self.current_url = Some(s!(url));
        }
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Evaluate `script` in page context. A JS null/undefined result comes
    /// back as None; only transport/evaluation failures are errors.
    pub fn evaluate(&self, script: &str) -> Result<Option<serde_json::Value>, Box<dyn Error>> {
        let object = self.tab.evaluate(script, false)?;
        Ok(object.value.filter(|v| !v.is_null()))
    }
}
