//! The tagline command-line interface.
//!
//! Loads a runner's JSON report and replays it through the reporter, either
//! as the tagged protocol (`emit`) or as a colored human summary
//! (`summary`).

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::{Command, TaglineArgs};
use crate::cli::output::StdioSink;
use crate::errors::TaglineError;
use crate::model::{RunReport, TestStatus};
use crate::reporter::{Reporter, ReporterConfig};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = TaglineArgs::parse();

    let result = match args.command {
        Command::Emit { report, root_dir } => handle_emit(&report, root_dir),
        Command::Summary { report } => handle_summary(&report),
    };

    if let Err(e) = result {
        // The failed-run signal only carries the exit status; diagnostics
        // would pollute the protocol stream.
        if !matches!(e, TaglineError::TestsFailed) {
            eprintln!("{:?}", miette::Report::new(e));
        }
        process::exit(1);
    }
}

/// Reads and parses a runner report document.
fn load_report(path: &Path) -> Result<RunReport, TaglineError> {
    let raw = fs::read_to_string(path).map_err(|source| TaglineError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TaglineError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Handles the `emit` subcommand: replays every file result through the
/// reporter and surfaces the sticky failure flag as the exit status.
fn handle_emit(path: &Path, root_dir: String) -> Result<(), TaglineError> {
    let report = load_report(path)?;
    let mut reporter = Reporter::new(ReporterConfig { root_dir });
    let mut sink = StdioSink;

    reporter.on_run_start();
    for file in &report.test_results {
        reporter.on_file_result(file, &mut sink);
    }
    reporter.on_run_complete();

    match reporter.last_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Handles the `summary` subcommand: one colored PASS/FAIL/SKIP line per
/// test plus a totals line.
fn handle_summary(path: &Path) -> Result<(), TaglineError> {
    let report = load_report(path)?;
    let mut stdout = StandardStream::stdout(color_choice());
    let (mut passed, mut failed, mut skipped) = (0usize, 0usize, 0usize);

    for file in &report.test_results {
        for test in &file.test_results {
            let (label, color) = match test.status {
                TestStatus::Passed => {
                    passed += 1;
                    ("PASS", Color::Green)
                }
                TestStatus::Failed => {
                    failed += 1;
                    ("FAIL", Color::Red)
                }
                _ => {
                    skipped += 1;
                    ("SKIP", Color::Yellow)
                }
            };
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
            let _ = write!(stdout, "{}", label);
            let _ = stdout.reset();
            let _ = writeln!(stdout, ": {}", full_title(&test.ancestor_titles, &test.title));
        }
    }

    let _ = writeln!(
        stdout,
        "\nTest summary: total {}, passed {}, failed {}, skipped {}",
        passed + failed + skipped,
        passed,
        failed,
        skipped,
    );

    if failed > 0 {
        return Err(TaglineError::TestsFailed);
    }
    Ok(())
}

/// Joins ancestor titles and the test title into one display name.
fn full_title(ancestors: &[String], title: &str) -> String {
    if ancestors.is_empty() {
        title.to_string()
    } else {
        format!("{} > {}", ancestors.join(" > "), title)
    }
}

fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
