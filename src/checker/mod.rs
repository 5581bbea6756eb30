// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts candidate links from text, line by line
// - http: Checks one link with a HEAD request and classifies the outcome
// - pool: Runs the checks on a fixed-size worker pool
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `checker::check_links()` instead of `checker::pool::check_links()`.
// =============================================================================

mod http;
mod markdown;
mod pool;

pub use http::{build_client, verify_link, LinkCheckResult, SENTINEL_STATUS};
pub use markdown::{dedupe_links, extract_line_links, extract_markdown_links, MarkdownLink};
pub use pool::{check_links, ABORTED_MESSAGE};
