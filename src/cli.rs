// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: one input file goes in, a report comes out.
//
// Note that --file is an Option even though a run needs it. clap would exit
// with its own usage code (2) for a missing required flag, but a missing
// input file must exit with 1 like every other file-level failure.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "link-sentinel",
    version,
    about = "Checks every [text](url) link in a markdown file over HTTP",
    long_about = "link-sentinel scans a text file line by line for markdown links and sends one \
                  HEAD request per link. It exits with 1 when any link is broken, which makes it \
                  easy to drop into a CI pipeline."
)]
pub struct Cli {
    /// Markdown (or any text) file to scan
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print every link with its status, and enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Only print the links that failed
    #[arg(long)]
    pub failed_only: bool,

    /// Number of links checked at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Seconds before a single request is given up on
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Check repeated links only once
    #[arg(long)]
    pub dedupe: bool,

    /// Output the report as JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["link-sentinel", "--file", "docs.md"]);
        assert_eq!(cli.file, Some(PathBuf::from("docs.md")));
        assert!(!cli.verbose);
        assert!(!cli.failed_only);
        assert!(!cli.json);
        assert_eq!(cli.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_file_is_optional_for_clap() {
        let cli = Cli::try_parse_from(["link-sentinel", "--verbose"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_failed_only_flag() {
        let cli = Cli::parse_from(["link-sentinel", "--file", "a.md", "--failed-only"]);
        assert!(cli.failed_only);
    }
}
