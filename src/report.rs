// src/report.rs
// =============================================================================
// Aggregates the checked links and decides what gets printed.
//
// Counting and filtering live here; coloring lives in main.rs. Every line
// type implements Display without colors so tests can compare plain text.
// =============================================================================

use serde::Serialize;
use std::fmt;

use crate::checker::LinkCheckResult;

/// Counts over the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_results(results: &[LinkCheckResult]) -> Self {
        let valid = results.iter().filter(|r| r.is_valid).count();
        Self {
            valid,
            invalid: results.len() - valid,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Which lines a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Only the summary line
    Summary,
    /// The summary line followed by one line per link
    Verbose,
    /// Only the failed links, no summary line
    FailedOnly,
}

impl OutputMode {
    // --failed-only beats --verbose when both are given
    pub fn from_flags(verbose: bool, failed_only: bool) -> Self {
        match (verbose, failed_only) {
            (_, true) => Self::FailedOnly,
            (true, false) => Self::Verbose,
            (false, false) => Self::Summary,
        }
    }
}

/// One printable line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine<'a> {
    Summary(Summary),
    Link(&'a LinkCheckResult),
    Failed(&'a LinkCheckResult),
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary(summary) => write!(
                f,
                "Summary: {} valid links, {} invalid links",
                summary.valid, summary.invalid
            ),
            Self::Link(result) => write!(f, "{}: {}", result.link, result.status_code),
            Self::Failed(result) => write!(f, "Failed link: {} ({})", result.link, result.status_code),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    results: &'a [LinkCheckResult],
}

// The collected outcome of one run
#[derive(Debug, Clone)]
pub struct Report {
    results: Vec<LinkCheckResult>,
    summary: Summary,
}

impl Report {
    pub fn new(results: Vec<LinkCheckResult>) -> Self {
        let summary = Summary::from_results(&results);
        Self { results, summary }
    }

    pub fn results(&self) -> &[LinkCheckResult] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn failed(&self) -> impl Iterator<Item = &LinkCheckResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }

    pub fn lines(&self, mode: OutputMode) -> Vec<ReportLine<'_>> {
        match mode {
            OutputMode::Summary => vec![ReportLine::Summary(self.summary)],
            OutputMode::Verbose => std::iter::once(ReportLine::Summary(self.summary))
                .chain(self.results.iter().map(ReportLine::Link))
                .collect(),
            OutputMode::FailedOnly => self.failed().map(ReportLine::Failed).collect(),
        }
    }

    /// 1 when any link failed, 0 otherwise. The output mode has no say.
    pub fn exit_code(&self) -> i32 {
        if self.summary.invalid > 0 {
            1
        } else {
            0
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            summary: self.summary,
            results: &self.results,
        })
    }
}
