// src/checker/markdown.rs
// =============================================================================
// This module extracts candidate links from markdown-style text.
//
// We deliberately do NOT run a full CommonMark parser here. Every line is
// scanned on its own with the pattern `[text](url)`:
// - both groups are matched non-greedily, so the first `)` closes the url
// - the url is trimmed but otherwise not validated (the verifier decides)
// - a link split across two lines is not detected
//
// Rust concepts:
// - OnceLock: Compile a regex once and share it between calls
// - Iterators: captures_iter walks every match on a line
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// One `[text](url)` occurrence found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    /// The display text between the square brackets
    pub text: String,
    /// The trimmed text between the parentheses
    pub url: String,
}

// The pattern is a constant, so compiling it can only fail if the constant
// itself is wrong.
fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"))
}

// Extracts every markdown link from a single line, left to right
//
// Example input:
//   "See [docs]( https://example.com ) and [x](y)"
//
// Example output:
//   [MarkdownLink { text: "docs", url: "https://example.com" },
//    MarkdownLink { text: "x", url: "y" }]
pub fn extract_line_links(line: &str) -> Vec<MarkdownLink> {
    link_pattern()
        .captures_iter(line)
        .map(|caps| MarkdownLink {
            text: caps[1].to_string(),
            url: caps[2].trim().to_string(),
        })
        .collect()
}

// Extracts the urls of all links in a document, in document order
//
// Each line is scanned independently. Duplicates are kept; see dedupe_links.
pub fn extract_markdown_links(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(extract_line_links)
        .map(|link| link.url)
        .collect()
}

/// Drops repeated urls, keeping the first occurrence of each.
pub fn dedupe_links(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
