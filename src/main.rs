// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Scan the input file and check every link (see src/lib.rs)
// 4. Print the report in the requested mode
// 5. Exit with proper code (0 = all links valid, 1 = broken links or bad input)
// =============================================================================

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use link_sentinel::cli::Cli;
use link_sentinel::{logger, CheckerConfig, OutputMode, Report, ReportLine, ScanError};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fatal, file-level problem: no partial results get printed.
            // The diagnostic itself goes out once, through eprintln.
            debug!(error = %e, "run aborted");
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Returns the exit code for a completed run
//   Ok(0) = every link is valid (or there were none)
//   Ok(1) = at least one link is invalid
//   Err   = the input could not be read, main turns this into 1
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let path = cli.file.as_deref().ok_or(ScanError::MissingFile)?;
    let config = CheckerConfig::from(&cli);
    info!(
        path = %path.display(),
        concurrency = config.concurrency,
        timeout_secs = config.timeout.as_secs(),
        dedupe = config.dedupe,
        "scanning file"
    );

    let report = link_sentinel::scan_file(path, &config).await?;

    let mode = OutputMode::from_flags(cli.verbose, cli.failed_only);
    print_report(&report, mode, cli.json)?;

    Ok(report.exit_code())
}

// Prints the report either as JSON or as colored text lines
fn print_report(report: &Report, mode: OutputMode, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        for line in report.lines(mode) {
            println!("{}", paint(&line));
        }
    }
    Ok(())
}

// Colors a report line: green for valid, red for anything that failed
fn paint(line: &ReportLine<'_>) -> String {
    match line {
        ReportLine::Summary(summary) if summary.invalid > 0 => line.to_string().red().to_string(),
        ReportLine::Summary(_) => line.to_string().green().to_string(),
        ReportLine::Link(result) => {
            let status = result.status_code.to_string();
            let status = if result.is_valid { status.green() } else { status.red() };
            format!("{}: {}", result.link, status)
        }
        ReportLine::Failed(_) => line.to_string().red().to_string(),
    }
}
