use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while building or writing a report.
///
/// The renderer never catches these itself; a failed snippet read aborts
/// the whole report and propagates to whoever invoked the sink.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read source file {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("focus line {line} is outside the file ({total} lines)")]
    LineOutOfRange { line: usize, total: usize },
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}
