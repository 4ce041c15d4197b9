//! Dashboard configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use atelier_admin_client::HttpClientOptions;

/// What to do with the last good lists when a refresh fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StaleDataPolicy {
    /// Leave the previous workers and tasks in place.
    #[default]
    KeepLastGood,
    /// Drop both lists so nothing stale is shown after the error clears.
    Clear,
}

/// How fetch results are applied to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub stale_data: StaleDataPolicy,
    /// Drop fetch results older than the newest issued fetch.
    pub discard_stale: bool,
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Owner API base URL.
    pub api_url: String,

    /// Bearer token for the owner API.
    pub token: Option<String>,

    /// Per-request timeout; None leaves requests unbounded.
    pub request_timeout: Option<Duration>,

    /// Result application policy.
    pub refresh: RefreshPolicy,

    /// File that receives tracing output while the TUI owns the terminal.
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api".to_string(),
            token: None,
            request_timeout: None,
            refresh: RefreshPolicy::default(),
            log_file: PathBuf::from("/tmp/atelier-dashboard.log"),
        }
    }
}

impl DashboardConfig {
    /// Options for the HTTP owner client.
    pub fn client_options(&self) -> HttpClientOptions {
        HttpClientOptions {
            token: self.token.clone(),
            timeout: self.request_timeout,
        }
    }
}
