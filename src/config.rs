//! Gate configuration.

use std::time::Duration;

/// Settings shared by the request gate and navigation guard.
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// Backend base URL, no trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Application title used when a route has none.
    pub app_title: String,
    /// Path of the login route.
    pub login_path: String,
    /// Safe default route for redirects (the landing page).
    pub landing_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_owned(),
            timeout: Duration::from_secs(5),
            app_title: "Admin Console".to_owned(),
            login_path: "/login".to_owned(),
            landing_path: "/".to_owned(),
        }
    }
}

impl GateConfig {
    /// Load from `API_BASE_URL`, `API_TIMEOUT_MS` and `APP_TITLE`, falling
    /// back to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(ms) = std::env::var("API_TIMEOUT_MS").ok().and_then(|raw| raw.parse().ok()) {
            config.timeout = Duration::from_millis(ms);
        }
        if let Ok(app_title) = std::env::var("APP_TITLE") {
            config.app_title = app_title;
        }
        config
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
