//! Syntax highlighting: tokenize source, build styled segments, emit ANSI
//! (or plain), and cut numbered snippet windows around a focus line.

use super::theme::{ANSI_RESET, Style, Theme, token_style};
use crate::error::ReportError;
use crate::lexer::Lexer;
use std::fs;
use std::path::Path;

/// (byte_start, byte_end, style) for a contiguous segment of source.
type Segment = (usize, usize, Style);

fn segments(source: &str) -> Vec<Segment> {
    Lexer::new(source)
        .tokenize()
        .iter()
        .map(|s| (s.start, s.end, token_style(s.token)))
        .collect()
}

/// Emit highlighted source with a specific theme. Gaps between tokens
/// (whitespace) pass through verbatim.
pub fn highlight<T: Theme>(source: &str, theme: &T) -> String {
    if source.is_empty() {
        return String::new();
    }

    let segs = segments(source);
    let mut out = String::with_capacity(source.len() + segs.len() * 16); // rough ANSI overhead
    let mut pos = 0;

    for (a, b, style) in segs {
        if a > pos {
            out.push_str(&source[pos..a]);
        }
        if a < b {
            out.push_str(theme.prefix(style));
            out.push_str(&source[a..b]);
            out.push_str(theme.suffix(style));
        }
        pos = b;
    }
    if pos < source.len() {
        out.push_str(&source[pos..]);
    }

    out
}

/// Highlight source line by line. Token spans are clipped at line
/// boundaries, so every returned line is styled self-contained and can be
/// printed (or discarded) independently.
pub fn styled_lines<T: Theme>(source: &str, theme: &T) -> Vec<String> {
    styled_lines_with(source, theme, None)
}

fn styled_lines_with<T: Theme>(source: &str, theme: &T, focus: Option<usize>) -> Vec<String> {
    let segs = segments(source);
    let mut lines = Vec::new();
    let mut offset = 0;
    let mut seg_idx = 0;

    for (n, raw) in source.split_inclusive('\n').enumerate() {
        let content_len = raw.trim_end_matches(['\n', '\r']).len();
        let (ls, le) = (offset, offset + content_len);
        offset += raw.len();

        while seg_idx < segs.len() && segs[seg_idx].1 <= ls {
            seg_idx += 1;
        }
        let bg = match focus {
            Some(f) if f == n + 1 => theme.line_highlight_bg(),
            _ => "",
        };
        lines.push(render_line(source, ls, le, &segs[seg_idx..], theme, bg));
    }

    lines
}

/// Render one line's byte range, clipping overlapping segments to it. When
/// a background prefix is given it is re-applied after every segment
/// suffix, since the suffix reset would otherwise clear it mid-line.
fn render_line<T: Theme>(
    source: &str,
    ls: usize,
    le: usize,
    segs: &[Segment],
    theme: &T,
    bg: &str,
) -> String {
    let mut out = String::new();
    out.push_str(bg);
    let mut pos = ls;

    for &(a, b, style) in segs {
        if a >= le {
            break;
        }
        let (a, b) = (a.max(ls), b.min(le));
        if a > pos {
            out.push_str(&source[pos..a]);
        }
        if a < b {
            out.push_str(theme.prefix(style));
            out.push_str(&source[a..b]);
            out.push_str(theme.suffix(style));
            if !bg.is_empty() {
                out.push_str(bg);
            }
        }
        pos = pos.max(b);
    }
    if pos < le {
        out.push_str(&source[pos..le]);
    }
    if !bg.is_empty() {
        out.push_str(ANSI_RESET);
    }
    out
}

/// A numbered, highlighted window of `context` lines around `line`
/// (1-based). The window keeps its height by shifting at file edges and
/// only shrinks when the file itself is shorter. The focus line's gutter is
/// painted with the theme's highlight background.
///
/// Fails if the file cannot be read or the focus line is outside it; the
/// caller decides what a report without a snippet means.
pub fn snippet<T: Theme>(
    path: &Path,
    line: usize,
    context: usize,
    theme: &T,
) -> Result<String, ReportError> {
    let source = fs::read_to_string(path).map_err(|e| ReportError::Source {
        path: path.to_path_buf(),
        source: e,
    })?;
    let total = source.lines().count();
    if line == 0 || line > total {
        return Err(ReportError::LineOutOfRange { line, total });
    }

    let (first, last) = window(line, context.max(1), total);
    let styled = styled_lines_with(&source, theme, Some(line));
    let width = last.to_string().len();

    let mut out = String::new();
    for n in first..=last {
        if n > first {
            out.push('\n');
        }
        let gutter = format!("{n:>width$}");
        let prefix = if n == line {
            theme.line_number_highlight_bg()
        } else {
            theme.line_number()
        };
        out.push_str(&wrap(&gutter, prefix));
        out.push_str("| ");
        out.push_str(&styled[n - 1]);
    }

    Ok(out)
}

fn window(line: usize, context: usize, total: usize) -> (usize, usize) {
    let mut first = line.saturating_sub(context / 2).max(1);
    let mut last = first + context - 1;
    if last > total {
        last = total;
        first = last.saturating_sub(context - 1).max(1);
    }
    (first, last)
}

fn wrap(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        text.to_string()
    } else {
        format!("{prefix}{text}{ANSI_RESET}")
    }
}
