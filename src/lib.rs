// src/lib.rs
// =============================================================================
// link-sentinel: verify every markdown link in a document over HTTP.
//
// Pipeline:
//   text --(checker::markdown)--> candidate links
//        --(checker::pool + checker::http)--> LinkCheckResult per link
//        --(report)--> summary, filtered lines, exit code
//
// The binary (src/main.rs) only parses flags, sets up logging and prints.
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod report;

use std::path::Path;

pub use checker::{LinkCheckResult, SENTINEL_STATUS};
pub use config::CheckerConfig;
pub use error::{Result, ScanError};
pub use report::{OutputMode, Report, ReportLine, Summary};

// Checks a list of candidate links and collects the report
//
// Per-link failures end up inside the report; the only error is a client
// that cannot be built.
pub async fn check_candidates(links: Vec<String>, config: &CheckerConfig) -> Result<Report> {
    let links = if config.dedupe {
        checker::dedupe_links(links)
    } else {
        links
    };

    let client = checker::build_client(config)?;
    let results = checker::check_links(&client, links, config.concurrency).await;
    Ok(Report::new(results))
}

/// Extracts and checks every link in `text`.
pub async fn scan_text(text: &str, config: &CheckerConfig) -> Result<Report> {
    check_candidates(checker::extract_markdown_links(text), config).await
}

/// Reads `path` line by line, then extracts and checks every link in it.
pub async fn scan_file(path: &Path, config: &CheckerConfig) -> Result<Report> {
    let candidates = input::read_candidates(path)?;
    check_candidates(candidates, config).await
}
