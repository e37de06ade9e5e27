//! Per-invocation value bundles handed to a diagnostics sink.
//!
//! Nothing here persists across calls: a runtime builds an event, the sink
//! renders it, the event is dropped.

use std::fmt;
use std::path::PathBuf;

use crate::format::StyleTag;

/// One dispatched runtime error: severity code plus site.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub code: u32,
    pub message: String,
    pub file: PathBuf,
    pub line: usize,
}

impl ErrorEvent {
    pub fn new(code: u32, message: impl Into<String>, file: impl Into<PathBuf>, line: usize) -> Self {
        ErrorEvent {
            code,
            message: message.into(),
            file: file.into(),
            line,
        }
    }
}

/// One uncaught exception, with the propagation history the runtime
/// recorded. `trace` is innermost-frame-first, as runtimes produce it.
#[derive(Debug, Clone)]
pub struct ExceptionEvent {
    pub type_name: String,
    pub message: String,
    pub file: PathBuf,
    pub line: usize,
    pub trace: Vec<StackFrame>,
}

impl ExceptionEvent {
    pub fn new(
        type_name: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<PathBuf>,
        line: usize,
    ) -> Self {
        ExceptionEvent {
            type_name: type_name.into(),
            message: message.into(),
            file: file.into(),
            line,
            trace: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_trace(mut self, trace: Vec<StackFrame>) -> Self {
        self.trace = trace;
        self
    }
}

/// One recorded call site in an exception's propagation history.
#[derive(Debug, Clone)]
pub struct StackFrame {
    /// Type the called function is declared on, if any.
    pub declaring_type: Option<String>,
    pub call: CallKind,
    pub function: String,
    pub args: Vec<FrameArg>,
    pub file: PathBuf,
    pub line: usize,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, file: impl Into<PathBuf>, line: usize) -> Self {
        StackFrame {
            declaring_type: None,
            call: CallKind::Free,
            function: function.into(),
            args: Vec::new(),
            file: file.into(),
            line,
        }
    }

    #[must_use]
    pub fn on_type(mut self, declaring_type: impl Into<String>, call: CallKind) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self.call = call;
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<FrameArg>) -> Self {
        self.args = args;
        self
    }
}

/// How a frame's function was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Static,
    Instance,
    Free,
}

impl CallKind {
    /// The symbol printed between declaring type and function name.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Static => "::",
            Self::Instance => ".",
            Self::Free => "",
        }
    }
}

/// A captured argument value, reduced to the kinds the trace renderer
/// distinguishes. Values outside the first two kinds are stringified at
/// capture time, so rendering never inspects live values.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameArg {
    Text(String),
    Int(i64),
    Other(String),
}

impl FrameArg {
    /// Capture any displayable value as an `Other` argument.
    pub fn other(value: impl fmt::Display) -> Self {
        FrameArg::Other(value.to_string())
    }

    /// Display string for the trace: text is wrapped in literal double
    /// quotes, everything else is printed as captured.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            FrameArg::Text(s) => format!("\"{s}\""),
            FrameArg::Int(n) => n.to_string(),
            FrameArg::Other(s) => s.clone(),
        }
    }

    /// Style tags for the trace, chosen by the captured kind (independent
    /// of the quoting applied by [`FrameArg::render`]).
    #[must_use]
    pub fn style(&self) -> &'static [StyleTag] {
        match self {
            FrameArg::Text(_) => &[StyleTag::Green],
            FrameArg::Int(_) => &[StyleTag::Blue],
            FrameArg::Other(_) => &[StyleTag::LightCyan],
        }
    }
}

impl From<&str> for FrameArg {
    fn from(s: &str) -> Self {
        FrameArg::Text(s.to_string())
    }
}

impl From<String> for FrameArg {
    fn from(s: String) -> Self {
        FrameArg::Text(s)
    }
}

impl From<i64> for FrameArg {
    fn from(n: i64) -> Self {
        FrameArg::Int(n)
    }
}

impl From<i32> for FrameArg {
    fn from(n: i32) -> Self {
        FrameArg::Int(n.into())
    }
}

impl From<u32> for FrameArg {
    fn from(n: u32) -> Self {
        FrameArg::Int(n.into())
    }
}

impl From<bool> for FrameArg {
    fn from(b: bool) -> Self {
        FrameArg::Other(b.to_string())
    }
}

impl From<f64> for FrameArg {
    fn from(x: f64) -> Self {
        FrameArg::Other(x.to_string())
    }
}
