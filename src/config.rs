// src/config.rs
// =============================================================================
// Tunables for a checking run.
//
// The CLI fills these in (see `From<&Cli>`); library users and tests can
// start from `CheckerConfig::default()` and override single fields.
// =============================================================================

use crate::cli::Cli;
use std::time::Duration;

/// Worker pool size used when nothing else is configured.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Number of worker tasks; never scales with the number of links
    pub concurrency: usize,
    /// Upper bound on a single HEAD request, connect time included
    pub timeout: Duration,
    /// Check each distinct url only once
    pub dedupe: bool,
    /// Sent as the User-Agent header
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dedupe: false,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl From<&Cli> for CheckerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            concurrency: cli.concurrency.max(1),
            timeout: Duration::from_secs(cli.timeout.max(1)),
            dedupe: cli.dedupe,
            ..Self::default()
        }
    }
}
