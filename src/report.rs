//! Assemble and print fault reports: title banner, source snippet, and the
//! reversed call trace.
//!
//! Rendering is pure string construction; the only side effect is the
//! single stdout write at the end of each `report_*` call. Layout is fixed:
//! every block sits behind a four-space left padding, and the snippet is
//! re-indented to nest under the banner.

use std::io::{self, Write};
use std::path::Path;

use crate::error::ReportError;
use crate::event::{ErrorEvent, ExceptionEvent, StackFrame};
use crate::format::{ANSI_RESET, ReportTheme, StyleTag, build_style_code, snippet, styled};
use crate::severity::{SeverityClass, SeverityFilter};

/// Indent unit every report block is nested behind.
pub const LEFT_PADDING: &str = "    ";

/// Height of the snippet window cut around a failure line.
const SNIPPET_CONTEXT: usize = 9;

/// Where a host runtime's fault dispatch delivers events. Implementations
/// must not assume anything about when or how often they are invoked.
pub trait DiagnosticsSink: Send + Sync {
    fn report_error(&self, event: &ErrorEvent) -> Result<(), ReportError>;
    fn report_exception(&self, event: &ExceptionEvent) -> Result<(), ReportError>;
}

/// Renders fault reports to standard output.
///
/// Carries all rendering state — theme and severity mask — so one reporter
/// constructed at setup can serve every subsequent event without global
/// state.
pub struct ConsoleReporter {
    theme: ReportTheme,
    filter: SeverityFilter,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(filter: SeverityFilter) -> Self {
        Self::with_theme(ReportTheme::default(), filter)
    }

    #[must_use]
    pub fn with_theme(theme: ReportTheme, filter: SeverityFilter) -> Self {
        ConsoleReporter { theme, filter }
    }

    /// The banner: inverse title badge, message, site line and the snippet.
    ///
    /// Fails when the snippet cannot be produced; no truncated banner is
    /// ever returned.
    pub fn render_banner(
        &self,
        title: &str,
        message: &str,
        file: &Path,
        line: usize,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        out.push_str(LEFT_PADDING);
        out.push_str(&styled(
            &format!(" {title} "),
            &[StyleTag::BgRed, StyleTag::White, StyleTag::Bold],
        ));
        out.push_str(" : ");
        out.push_str(&styled(message, &[StyleTag::Yellow]));
        out.push_str("\n\n");
        out.push_str(LEFT_PADDING);
        out.push_str("at ");
        out.push_str(&styled(&file.display().to_string(), &[StyleTag::Green]));
        out.push('\n');

        let snip = snippet(file, line, SNIPPET_CONTEXT, &self.theme)?;
        out.push_str(LEFT_PADDING);
        out.push(' ');
        out.push_str(&snip.replace('\n', &format!("\n {LEFT_PADDING}")));

        Ok(out)
    }

    /// The call trace, outermost call first.
    ///
    /// The input is innermost-first as runtimes record it; rendering walks
    /// it reversed and numbers the blocks from 1, so block 1 is always the
    /// outermost (oldest) call. An empty trace renders as empty text.
    #[must_use]
    pub fn render_trace(&self, frames: &[StackFrame]) -> String {
        let mut out = String::new();
        if frames.is_empty() {
            return out;
        }

        out.push_str(&styled(
            &format!("\n{LEFT_PADDING}Call trace: "),
            &[StyleTag::Yellow],
        ));

        for (i, frame) in frames.iter().rev().enumerate() {
            out.push_str("\n\n");
            out.push_str(LEFT_PADDING);
            out.push_str(&format!(
                "{}{}{}",
                build_style_code(&[StyleTag::Blue]),
                i + 1,
                ANSI_RESET
            ));
            out.push_str(LEFT_PADDING);
            out.push_str(&styled(
                frame.declaring_type.as_deref().unwrap_or(""),
                &[StyleTag::Yellow],
            ));
            out.push_str(&styled(frame.call.symbol(), &[StyleTag::White]));
            out.push_str(&styled(&frame.function, &[StyleTag::LightGray]));

            out.push('(');
            let args: Vec<String> = frame
                .args
                .iter()
                .map(|arg| styled(&arg.render(), arg.style()))
                .collect();
            out.push_str(&args.join(","));
            out.push(')');

            out.push('\n');
            out.push_str(LEFT_PADDING);
            out.push_str(LEFT_PADDING);
            out.push_str("  ");
            out.push_str(&styled(
                &format!("{} : {}", frame.file.display(), frame.line),
                &[StyleTag::Green],
            ));
        }

        out
    }

    /// Full error report, or `None` when the severity mask filters the
    /// event out.
    pub fn render_error(&self, event: &ErrorEvent) -> Result<Option<String>, ReportError> {
        if !self.filter.contains(event.code) {
            return Ok(None);
        }
        let class = SeverityClass::from_code(event.code);
        self.render_banner(class.label(), &event.message, &event.file, event.line)
            .map(Some)
    }

    /// Full exception report: blank line, banner titled with the concrete
    /// type name, trace, blank line.
    pub fn render_exception(&self, event: &ExceptionEvent) -> Result<String, ReportError> {
        let banner =
            self.render_banner(&event.type_name, &event.message, &event.file, event.line)?;
        let trace = self.render_trace(&event.trace);

        let mut out = String::with_capacity(banner.len() + trace.len() + 2);
        out.push('\n');
        out.push_str(&banner);
        out.push_str(&trace);
        out.push('\n');
        Ok(out)
    }

    fn write(&self, report: &str) -> Result<(), ReportError> {
        io::stdout().lock().write_all(report.as_bytes())?;
        Ok(())
    }
}

impl DiagnosticsSink for ConsoleReporter {
    fn report_error(&self, event: &ErrorEvent) -> Result<(), ReportError> {
        match self.render_error(event)? {
            Some(report) => self.write(&report),
            None => Ok(()),
        }
    }

    fn report_exception(&self, event: &ExceptionEvent) -> Result<(), ReportError> {
        let report = self.render_exception(event)?;
        self.write(&report)
    }
}
