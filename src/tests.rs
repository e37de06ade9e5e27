use crate::event::{CallKind, ErrorEvent, ExceptionEvent, FrameArg, StackFrame};
use crate::format::{AnsiTheme, ReportTheme};
use crate::report::{ConsoleReporter, LEFT_PADDING};
use crate::severity::{SeverityFilter, codes};

use std::io::Write as _;
use std::path::PathBuf;

/// Helper: write a small script fixture and return its path.
fn fixture(dir: &tempfile::TempDir, lines: usize) -> PathBuf {
    let path = dir.path().join("job.rs");
    let mut f = std::fs::File::create(&path).unwrap();
    for n in 1..=lines {
        writeln!(f, "let step_{n} = run(\"phase\", {n});").unwrap();
    }
    path
}

fn default_reporter() -> ConsoleReporter {
    ConsoleReporter::new(SeverityFilter::default())
}

fn plain_reporter() -> ConsoleReporter {
    ConsoleReporter::with_theme(ReportTheme::new(AnsiTheme::none()), SeverityFilter::default())
}

// ── Full exception reports ──────────────────────────────────────

#[test]
fn exception_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, 14);

    let trace = vec![
        StackFrame::new("apply", "steps.rs", 31)
            .on_type("Step", CallKind::Instance)
            .with_args(vec![FrameArg::from("phase"), FrameArg::from(9)]),
        StackFrame::new("main", "job.rs", 3),
    ];
    let event =
        ExceptionEvent::new("MissingInput", "no value for \"phase\"", &path, 7).with_trace(trace);

    let out = default_reporter().render_exception(&event).unwrap();

    assert!(out.starts_with('\n'));
    assert!(out.ends_with('\n'));
    assert!(out.contains(" MissingInput "));
    assert!(out.contains(&format!("at \x1b[32m{}\x1b[0m", path.display())));
    assert!(out.contains("Call trace: "));
    // outermost call is block 1
    assert!(out.find("main").unwrap() < out.find("apply").unwrap());
    assert!(out.contains("\x1b[32m\"phase\"\x1b[0m,\x1b[34m9\x1b[0m"));
    // snippet nests one space deeper than the banner padding
    assert!(out.contains(&format!("\n {LEFT_PADDING}")));
}

#[test]
fn every_style_prologue_is_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, 14);

    let event = ExceptionEvent::new("Overflow", "value too large", &path, 7).with_trace(vec![
        StackFrame::new("grow", "buf.rs", 12)
            .on_type("Buf", CallKind::Static)
            .with_args(vec![FrameArg::from(1 << 20), FrameArg::other(f64::NAN)]),
    ]);

    let out = default_reporter().render_exception(&event).unwrap();

    // every escape is either a prologue or its matching reset
    let escapes = out.matches("\x1b[").count();
    let resets = out.matches("\x1b[0m").count();
    assert!(resets > 0);
    assert_eq!(escapes, resets * 2);
}

// ── Error reports and classification ────────────────────────────

#[test]
fn error_report_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, 10);

    let parse = ErrorEvent::new(codes::PARSE, "unexpected token", &path, 2);
    let out = plain_reporter().render_error(&parse).unwrap().unwrap();
    assert!(out.contains(" Fatal Error "));
    assert!(out.contains("unexpected token"));
    assert!(out.contains("let step_2"));

    // below the default mask: silently skipped
    let warn = ErrorEvent::new(codes::USER_WARNING, "deprecated call", &path, 2);
    assert!(plain_reporter().render_error(&warn).unwrap().is_none());

    // widen the mask and the same event renders
    let all = ConsoleReporter::with_theme(ReportTheme::new(AnsiTheme::none()), SeverityFilter::ALL);
    let out = all.render_error(&warn).unwrap().unwrap();
    assert!(out.contains(" Warning "));
}

#[test]
fn focus_line_is_marked_in_the_window() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, 20);

    let event = ErrorEvent::new(codes::ERROR, "boom", &path, 10);
    let out = default_reporter().render_error(&event).unwrap().unwrap();
    // gutter 10 on the error background, window spanning 6..14
    assert!(out.contains("\x1b[41m10\x1b[0m| "));
    assert!(out.contains("\x1b[38;5;246m 6\x1b[0m| "));
    assert!(out.contains("\x1b[38;5;246m14\x1b[0m| "));
}

// ── Trace chrome across frame shapes ────────────────────────────

#[test]
fn static_instance_and_free_frames() {
    let out = plain_reporter().render_trace(&[
        StackFrame::new("boot", "init.rs", 1),
        StackFrame::new("load", "cfg.rs", 5).on_type("Config", CallKind::Static),
        StackFrame::new("get", "map.rs", 9).on_type("Map", CallKind::Instance),
    ]);

    assert!(out.contains("\x1b[33mConfig\x1b[0m\x1b[97m::\x1b[0m\x1b[37mload\x1b[0m"));
    assert!(out.contains("\x1b[33mMap\x1b[0m\x1b[97m.\x1b[0m\x1b[37mget\x1b[0m"));
    // free function: empty type and symbol, still wrapped
    assert!(out.contains("\x1b[33m\x1b[0m\x1b[97m\x1b[0m\x1b[37mboot\x1b[0m"));
    assert!(out.contains("init.rs : 1"));
}
