// Shared helpers for tagline integration tests.

use tagline::cli::output::OutputBuffer;
use tagline::{FileResult, Reporter, ReporterConfig, TestResult, TestStatus};

/// Builds a result with no duration and no failure data.
pub fn test_result(title: &str, status: TestStatus, ancestors: &[&str]) -> TestResult {
    TestResult {
        title: title.to_string(),
        status,
        ancestor_titles: ancestors.iter().map(|s| s.to_string()).collect(),
        duration: None,
        failure_messages: Vec::new(),
    }
}

/// Runs one file result through a fresh reporter, capturing both streams.
pub fn emit_to_buffer(file: &FileResult, root_dir: &str) -> OutputBuffer {
    let mut buf = OutputBuffer::new();
    let mut reporter = Reporter::new(ReporterConfig {
        root_dir: root_dir.to_string(),
    });
    reporter.on_file_result(file, &mut buf);
    buf
}
