//! Walks per-file payloads and writes the tagged protocol lines the display
//! consumer expects.
//!
//! Every protocol line is written with a leading newline so the consumer
//! sees each marker at the start of its own line regardless of what the
//! test process printed before it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ConsoleEntry, ConsoleKind, FileResult, TestResult, TestStatus};
use crate::suite::{group_by_suites, SuiteNode};
use crate::text::{ansi_to_html, collect_failure_messages, escape_lf};

/// Destination for emitted lines.
///
/// `out` carries protocol text, `err` carries runner-native error
/// passthrough. Implementations append a terminating newline per call,
/// matching `println!`/`eprintln!` semantics.
pub trait OutputSink {
    fn out(&mut self, line: &str);
    fn err(&mut self, line: &str);
}

/// Messages that already start in protocol form. The test code emitted a
/// structured line itself and must not be double-wrapped.
static PROTOCOL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(?:LOG|TAB|PROP|OUT|SWAP|TAG):[A-Z]*:[^>]*>").unwrap());

/// Emits one completed file: the reconstructed suite tree, then captured
/// console output, then the file-level failure block when present.
pub fn emit_file_result(file: &FileResult, root_dir: &str, sink: &mut dyn OutputSink) {
    emit_suite(&group_by_suites(&file.test_results), sink);
    if let Some(console) = &file.console {
        emit_console(console, root_dir, sink);
    }
    emit_run_failure(file.message.as_deref(), sink);
}

/// Depth-first pre-order: announce the suite, its own tests in arrival
/// order, child suites in first-seen order, then the closing marker. The
/// synthetic root skips the bracketing.
fn emit_suite(suite: &SuiteNode<'_>, sink: &mut dyn OutputSink) {
    let has_title = !suite.title.is_empty();
    if has_title {
        sink.out(&format!("\n<DESCRIBE::>{}", suite.title));
    }
    for test in &suite.tests {
        emit_test(test, sink);
    }
    for child in &suite.suites {
        emit_suite(child, sink);
    }
    if has_title {
        sink.out("\n<COMPLETEDIN::>");
    }
}

fn emit_test(test: &TestResult, sink: &mut dyn OutputSink) {
    sink.out(&format!("\n<IT::>{}", test.title));
    match test.status {
        TestStatus::Passed => sink.out("\n<PASSED::>Test Passed"),
        TestStatus::Failed => {
            sink.out("\n<FAILED::>Test Failed");
            // The FAILED marker cannot carry HTML; details ride in a
            // separate LOG:HTML line.
            let msg = escape_lf(&ansi_to_html(&collect_failure_messages(
                &test.failure_messages,
            )));
            sink.out(&format!(
                "\n<LOG:HTML:Failure><pre class=\"ansi\"><code>{msg}</code></pre>"
            ));
        }
        TestStatus::Pending => sink.out("\n<LOG::>Test Pending"),
        TestStatus::Todo => sink.out("\n<LOG::>Test TODO"),
        TestStatus::Skipped | TestStatus::Disabled => {}
    }
    sink.out(&format!("\n<COMPLETEDIN::>{}", format_duration(test.duration)));
}

/// Duration payload: whole milliseconds, "0" when the runner omitted it.
fn format_duration(duration: Option<f64>) -> String {
    match duration {
        Some(ms) if ms > 0.0 => format!("{}", ms.round() as u64),
        _ => "0".to_string(),
    }
}

/// Console entries in arrival order: `error` bypasses the protocol and goes
/// straight to the error stream; lines already in protocol form pass
/// through untouched; everything else gets wrapped with a `console.<type>`
/// call-site annotation.
pub fn emit_console(entries: &[ConsoleEntry], root_dir: &str, sink: &mut dyn OutputSink) {
    for entry in entries {
        if entry.kind == ConsoleKind::Error {
            sink.err(&entry.message);
            continue;
        }
        if PROTOCOL_LINE.is_match(&entry.message) {
            sink.out(&entry.message);
        } else {
            sink.out(&format!(
                "\n<LOG::console.{} {}>{}",
                entry.kind.as_str(),
                origin_location(&entry.origin, root_dir),
                escape_lf(&entry.message)
            ));
        }
    }
}

/// First line of the origin stack, trimmed, with the workspace root
/// scrubbed so absolute paths never reach the display.
fn origin_location(origin: &str, root_dir: &str) -> String {
    let first = origin.lines().next().unwrap_or("").trim();
    if root_dir.is_empty() {
        first.to_string()
    } else {
        first.replace(root_dir, "")
    }
}

/// Failure text not attributable to a single test (setup/teardown or
/// suite-level throw). Blank or whitespace-only messages are suppressed.
pub fn emit_run_failure(message: Option<&str>, sink: &mut dyn OutputSink) {
    let Some(message) = message else { return };
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return;
    }
    let msg = escape_lf(&ansi_to_html(trimmed));
    sink.out(&format!(
        "\n<LOG:HTML:Failures><pre class=\"ansi\"><code>{msg}</code></pre>"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputBuffer;

    #[test]
    fn duration_rounds_to_nearest_whole_millisecond() {
        assert_eq!(format_duration(Some(5.0)), "5");
        assert_eq!(format_duration(Some(4.6)), "5");
        assert_eq!(format_duration(Some(7.4)), "7");
        assert_eq!(format_duration(None), "0");
        assert_eq!(format_duration(Some(0.0)), "0");
        assert_eq!(format_duration(Some(-3.0)), "0");
    }

    #[test]
    fn blank_run_failure_is_suppressed() {
        let mut buf = OutputBuffer::new();
        emit_run_failure(None, &mut buf);
        emit_run_failure(Some(""), &mut buf);
        emit_run_failure(Some("   \n  "), &mut buf);
        assert!(buf.out.is_empty());
    }

    #[test]
    fn run_failure_goes_through_the_html_pipeline() {
        let mut buf = OutputBuffer::new();
        emit_run_failure(Some("  setup <failed>\nbadly  "), &mut buf);
        assert_eq!(
            buf.out,
            "\n<LOG:HTML:Failures><pre class=\"ansi\"><code>setup &lt;failed&gt;<:LF:>badly</code></pre>\n"
        );
    }

    #[test]
    fn origin_is_first_line_trimmed_and_scrubbed() {
        let origin = "  at Object.log (/repo/src/a.test.js:3:11)\n  at deeper (/repo/b.js:9:1)";
        assert_eq!(
            origin_location(origin, "/repo"),
            "at Object.log (/src/a.test.js:3:11)"
        );
        // An empty root dir scrubs nothing.
        assert_eq!(
            origin_location("at x (/repo/a.js:1:1)", ""),
            "at x (/repo/a.js:1:1)"
        );
    }
}
