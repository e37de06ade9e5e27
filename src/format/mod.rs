//! Format and syntax-highlight the source shown in fault reports.
//!
//! This module is modular and composable: themes map token kinds to styles,
//! segment building turns source + tokens into (byte range, style) runs,
//! and the highlighter merges runs and emits styled output — whole-source,
//! line by line, or as a numbered snippet window around a focus line.

mod highlight;
mod theme;

pub use highlight::{highlight, snippet, styled_lines};
pub use theme::{
    ANSI_RESET, AnsiTheme, ReportTheme, Style, StyleTag, Theme, build_style_code, styled,
    token_style,
};
