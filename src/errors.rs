//! Crate error type.
//!
//! Formatting itself is total and never fails; these variants cover report
//! ingestion on the CLI side plus the failed-run signal surfaced at the end
//! of a run.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TaglineError {
    #[error("failed to read report file '{path}'")]
    #[diagnostic(
        code(tagline::io),
        help("check that the path exists and is readable")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a valid runner report")]
    #[diagnostic(
        code(tagline::parse),
        help("expected the runner's JSON report format")
    )]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Returned from the final-status query when at least one test failed;
    /// its only purpose is to force a non-zero exit.
    #[error("Test Failed")]
    #[diagnostic(code(tagline::failed))]
    TestsFailed,
}
