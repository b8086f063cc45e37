//! Host-callback-shaped entry points.
//!
//! The runner drives a [`Reporter`] once per completed test file and asks it
//! for the final status when the run ends. All state lives on the value; a
//! fresh `Reporter` starts a fresh run.

use crate::emit::{emit_file_result, OutputSink};
use crate::errors::TaglineError;
use crate::model::{FileResult, TestStatus};

/// Reporter configuration supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    /// Workspace root; scrubbed from console origins so absolute paths never
    /// leak into the display.
    pub root_dir: String,
}

/// Formats per-file results and tracks whether any test failed across the
/// run.
pub struct Reporter {
    config: ReporterConfig,
    should_fail: bool,
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            should_fail: false,
        }
    }

    /// Run-level lifecycle hook; nothing to format at this point.
    pub fn on_run_start(&mut self) {}

    /// Per-test lifecycle hook; nothing to format at this point.
    pub fn on_test_start(&mut self) {}

    /// Per-file callback: records whether any test failed, then emits the
    /// suite tree, console passthrough, and file-level failure block.
    pub fn on_file_result(&mut self, file: &FileResult, sink: &mut dyn OutputSink) {
        if file
            .test_results
            .iter()
            .any(|t| t.status == TestStatus::Failed)
        {
            self.should_fail = true;
        }
        emit_file_result(file, &self.config.root_dir, sink);
    }

    /// Run-level lifecycle hook; the protocol has no run-completion marker.
    pub fn on_run_complete(&mut self) {}

    /// Final-status query: `Some` iff a failure was observed, which the host
    /// turns into a non-zero exit.
    pub fn last_error(&self) -> Option<TaglineError> {
        self.should_fail.then(|| TaglineError::TestsFailed)
    }
}
