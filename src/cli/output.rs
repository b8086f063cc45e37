//! Output sinks for emitted protocol lines.
//!
//! The emitter writes through the [`OutputSink`] trait so it can be
//! exercised against an in-memory buffer in tests while the CLI writes to
//! the real stdout/stderr pair.

use crate::emit::OutputSink;

/// Collects emitted lines into strings for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub out: String,
    pub err: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for OutputBuffer {
    fn out(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn err(&mut self, line: &str) {
        self.err.push_str(line);
        self.err.push('\n');
    }
}

/// Writes protocol lines to the process stdout/stderr for live use.
#[derive(Debug, Default)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn out(&mut self, line: &str) {
        println!("{line}");
    }

    fn err(&mut self, line: &str) {
        eprintln!("{line}");
    }
}
