//! Payload types delivered by the host test runner.
//!
//! These mirror the runner's JSON report shape (camelCase wire names) and
//! are read-only inputs to the formatter: constructed once per completed
//! test file, consumed synchronously, never persisted. Missing optional
//! fields collapse to empty defaults rather than erroring.

use serde::Deserialize;

/// Outcome of a single executed test case.
///
/// The runner also reports `skipped` and `disabled`; those produce no status
/// marker in the protocol but still get their `<IT::>`/`<COMPLETEDIN::>`
/// bracketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Pending,
    Todo,
    Skipped,
    Disabled,
}

/// One executed test case, annotated with the chain of enclosing suite
/// titles from outermost to innermost.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub title: String,
    pub status: TestStatus,
    /// Enclosing suite titles, outer-to-inner. Empty for root-level tests.
    #[serde(default)]
    pub ancestor_titles: Vec<String>,
    /// Wall time in milliseconds. The runner omits it for tests that never
    /// ran.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub failure_messages: Vec<String>,
}

/// Console channel a captured call was made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleKind {
    Assert,
    Count,
    Debug,
    Dir,
    Dirxml,
    Error,
    Group,
    GroupCollapsed,
    Info,
    Log,
    Table,
    Time,
    Warn,
}

impl ConsoleKind {
    /// Wire name as it appears in the `console.<type>` annotation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleKind::Assert => "assert",
            ConsoleKind::Count => "count",
            ConsoleKind::Debug => "debug",
            ConsoleKind::Dir => "dir",
            ConsoleKind::Dirxml => "dirxml",
            ConsoleKind::Error => "error",
            ConsoleKind::Group => "group",
            ConsoleKind::GroupCollapsed => "groupCollapsed",
            ConsoleKind::Info => "info",
            ConsoleKind::Log => "log",
            ConsoleKind::Table => "table",
            ConsoleKind::Time => "time",
            ConsoleKind::Warn => "warn",
        }
    }
}

impl std::fmt::Display for ConsoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One captured console call.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleEntry {
    #[serde(rename = "type")]
    pub kind: ConsoleKind,
    /// Possibly multi-line message text.
    pub message: String,
    /// Call-site description; only its first line is ever used.
    #[serde(default)]
    pub origin: String,
}

/// Everything the runner reports for one completed test file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileResult {
    #[serde(default, rename = "assertionResults", alias = "testResults")]
    pub test_results: Vec<TestResult>,
    /// File-level failure text for errors not attributable to a single test
    /// (a setup/teardown or suite-level throw).
    #[serde(default, alias = "failureMessage")]
    pub message: Option<String>,
    #[serde(default)]
    pub console: Option<Vec<ConsoleEntry>>,
}

/// The runner's whole-run JSON document. Used by the CLI to replay a full
/// run through the reporter; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    #[serde(default)]
    pub test_results: Vec<FileResult>,
}
