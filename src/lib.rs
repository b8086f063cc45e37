pub use crate::emit::{emit_console, emit_file_result, emit_run_failure, OutputSink};
pub use crate::errors::TaglineError;
pub use crate::model::{ConsoleEntry, ConsoleKind, FileResult, RunReport, TestResult, TestStatus};
pub use crate::reporter::{Reporter, ReporterConfig};
pub use crate::suite::{group_by_suites, SuiteNode};

pub mod cli;
pub mod emit;
pub mod errors;
pub mod model;
pub mod reporter;
pub mod suite;
pub mod text;
