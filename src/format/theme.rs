//! Styling: map token kinds to output styles and resolve symbolic style
//! tags to ANSI escape codes.
//!
//! **Constructs highlighted (each has its own style):**
//! - **Keyword** — fn, let, match, pub, impl, etc.
//! - **TypeName** — capitalized identifiers (user types)
//! - **BuiltinType** — u32, i64, bool, str, etc.
//! - **Identifier** — everything else bindable
//! - **Macro** — `name!` invocations
//! - **Lifetime** — `'a`, `'static`
//! - **LiteralString** — string, raw-string and char literals
//! - **LiteralNumber** — integer and float literals
//! - **Attribute** — `#[...]` / `#![...]`
//! - **Comment** — line, block and doc comments
//! - **Operator** — `+ - == => :: -> ?` etc.
//! - **Delimiter** — braces, parens, brackets, `;` `,` `:`

use crate::lexer::Token;

/// Semantic style for a segment of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Keyword,
    TypeName,
    BuiltinType,
    Identifier,
    Macro,
    Lifetime,
    LiteralString,
    LiteralNumber,
    Attribute,
    Comment,
    Operator,
    Delimiter,
}

/// Something that can map a style to a prefix/suffix (e.g. ANSI codes),
/// plus the decorations the snippet renderer asks for: the gutter style,
/// the focus line's background, and the focus gutter's background.
pub trait Theme {
    /// Prefix to emit before a segment with this style.
    fn prefix(&self, style: Style) -> &str;
    /// Suffix to emit after the segment (e.g. reset).
    fn suffix(&self, style: Style) -> &str;
    /// Style prefix for line-number gutters.
    fn line_number(&self) -> &str;
    /// Background prefix for the focus line's content; empty disables it.
    fn line_highlight_bg(&self) -> &str;
    /// Background prefix for the focus line's gutter.
    fn line_number_highlight_bg(&self) -> &str;
}

/// Default ANSI theme for terminal output.
#[derive(Debug, Clone)]
pub struct AnsiTheme {
    reset: String,
    keyword: String,
    type_name: String,
    builtin_type: String,
    ident: String,
    macro_call: String,
    lifetime: String,
    string: String,
    number: String,
    attribute: String,
    comment: String,
    operator: String,
    delimiter: String,
    line_number: String,
    line_highlight_bg: String,
    line_number_highlight_bg: String,
}

impl AnsiTheme {
    /// Theme with richer colors (One Dark / Dracula–inspired) for dark
    /// backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            keyword: "\x1b[38;5;208m".into(), // orange (fn, let, match, etc.)
            type_name: "\x1b[38;5;117m".into(), // light blue
            builtin_type: "\x1b[38;5;110m".into(), // steel blue (u32, bool, etc.)
            ident: "\x1b[38;5;223m".into(),   // light sand
            macro_call: "\x1b[1;38;5;221m".into(), // bold yellow (println!)
            lifetime: "\x1b[38;5;170m".into(), // purple/magenta
            string: "\x1b[38;5;113m".into(),  // green
            number: "\x1b[38;5;179m".into(),  // gold/amber
            attribute: "\x1b[38;5;103m".into(), // muted violet-gray
            comment: "\x1b[38;5;246m".into(), // gray
            operator: "\x1b[38;5;81m".into(), // cyan
            delimiter: "\x1b[38;5;102m".into(), // dim gray (braces, parens)
            line_number: "\x1b[38;5;246m".into(),
            line_highlight_bg: "\x1b[48;5;236m".into(),
            line_number_highlight_bg: "\x1b[48;5;238m".into(),
        }
    }

    /// No ANSI codes (plain text).
    #[must_use]
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            keyword: String::new(),
            type_name: String::new(),
            builtin_type: String::new(),
            ident: String::new(),
            macro_call: String::new(),
            lifetime: String::new(),
            string: String::new(),
            number: String::new(),
            attribute: String::new(),
            comment: String::new(),
            operator: String::new(),
            delimiter: String::new(),
            line_number: String::new(),
            line_highlight_bg: String::new(),
            line_number_highlight_bg: String::new(),
        }
    }

    fn style(&self, style: Style) -> &str {
        match style {
            Style::Keyword => self.keyword.as_str(),
            Style::TypeName => self.type_name.as_str(),
            Style::BuiltinType => self.builtin_type.as_str(),
            Style::Identifier => self.ident.as_str(),
            Style::Macro => self.macro_call.as_str(),
            Style::Lifetime => self.lifetime.as_str(),
            Style::LiteralString => self.string.as_str(),
            Style::LiteralNumber => self.number.as_str(),
            Style::Attribute => self.attribute.as_str(),
            Style::Comment => self.comment.as_str(),
            Style::Operator => self.operator.as_str(),
            Style::Delimiter => self.delimiter.as_str(),
        }
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, style: Style) -> &str {
        self.style(style)
    }

    fn suffix(&self, _style: Style) -> &str {
        self.reset.as_str()
    }

    fn line_number(&self) -> &str {
        self.line_number.as_str()
    }

    fn line_highlight_bg(&self) -> &str {
        self.line_highlight_bg.as_str()
    }

    fn line_number_highlight_bg(&self) -> &str {
        self.line_number_highlight_bg.as_str()
    }
}

/// Theme the fault reports use: an inherited base theme with two
/// decorations overridden — the focus line keeps its normal background,
/// and the focus gutter is painted on the error background instead.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    base: AnsiTheme,
}

impl ReportTheme {
    #[must_use]
    pub fn new(base: AnsiTheme) -> Self {
        ReportTheme { base }
    }
}

impl Default for ReportTheme {
    fn default() -> Self {
        ReportTheme::new(AnsiTheme::dark())
    }
}

impl Theme for ReportTheme {
    fn prefix(&self, style: Style) -> &str {
        self.base.prefix(style)
    }

    fn suffix(&self, style: Style) -> &str {
        self.base.suffix(style)
    }

    fn line_number(&self) -> &str {
        self.base.line_number()
    }

    fn line_highlight_bg(&self) -> &str {
        ""
    }

    fn line_number_highlight_bg(&self) -> &str {
        if self.base.reset.is_empty() { "" } else { "\x1b[41m" }
    }
}

/// Map a lexer token to a semantic style.
#[must_use]
pub fn token_style(t: Token) -> Style {
    match t {
        Token::Keyword => Style::Keyword,
        Token::TypeIdent => Style::TypeName,
        Token::PrimitiveType => Style::BuiltinType,
        Token::Ident => Style::Identifier,
        Token::MacroCall => Style::Macro,
        Token::Lifetime => Style::Lifetime,
        Token::StringLit | Token::RawStringLit | Token::CharLit => Style::LiteralString,
        Token::IntLit | Token::FloatLit => Style::LiteralNumber,
        Token::Attribute => Style::Attribute,
        Token::LineComment | Token::BlockComment | Token::DocComment => Style::Comment,
        Token::Operator => Style::Operator,
        Token::Delimiter | Token::Unknown => Style::Delimiter,
    }
}

// ── Symbolic style tags ─────────────────────────────────────────

/// Universal reset sequence; every styled text unit ends with exactly one.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Symbolic style tag, resolved to an SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Bold,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    LightGray,
    LightCyan,
    White,
    BgRed,
}

impl StyleTag {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Cyan => 36,
            Self::LightGray => 37,
            Self::BgRed => 41,
            Self::LightCyan => 96,
            Self::White => 97,
        }
    }
}

/// Escape prologue for a set of style tags. An empty set yields an empty
/// string, not a reset.
#[must_use]
pub fn build_style_code(tags: &[StyleTag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let codes: Vec<String> = tags.iter().map(|t| t.code().to_string()).collect();
    format!("\x1b[{}m", codes.join(";"))
}

/// Wrap content between the prologue for `tags` and one reset, so styling
/// never leaks into whatever is printed next.
#[must_use]
pub fn styled(text: &str, tags: &[StyleTag]) -> String {
    format!("{}{}{}", build_style_code(tags), text, ANSI_RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_codes() {
        assert_eq!(build_style_code(&[StyleTag::Yellow]), "\x1b[33m");
        assert_eq!(
            build_style_code(&[StyleTag::BgRed, StyleTag::White, StyleTag::Bold]),
            "\x1b[41;97;1m"
        );
        assert_eq!(build_style_code(&[]), "");
    }

    #[test]
    fn styled_wraps_with_single_reset() {
        let out = styled("hello", &[StyleTag::Green]);
        assert!(out.starts_with("\x1b[32m"));
        assert!(out.ends_with(ANSI_RESET));
        assert_eq!(out.matches(ANSI_RESET).count(), 1);
    }

    #[test]
    fn styled_keeps_embedded_content_verbatim() {
        let content = "line one\nline \x1b[31mtwo";
        let out = styled(content, &[StyleTag::Blue]);
        assert!(out.starts_with("\x1b[34m"));
        assert!(out.ends_with(ANSI_RESET));
        assert!(out.contains(content));
    }

    #[test]
    fn report_theme_disables_line_bg() {
        let theme = ReportTheme::default();
        assert_eq!(theme.line_highlight_bg(), "");
        assert_eq!(theme.line_number_highlight_bg(), "\x1b[41m");
    }

    #[test]
    fn report_theme_inherits_token_colors() {
        let base = AnsiTheme::dark();
        let theme = ReportTheme::new(base.clone());
        for style in [
            Style::Keyword,
            Style::LiteralString,
            Style::Comment,
            Style::Operator,
        ] {
            assert_eq!(theme.prefix(style), base.prefix(style));
            assert_eq!(theme.suffix(style), base.suffix(style));
        }
        assert_eq!(theme.line_number(), base.line_number());
    }

    #[test]
    fn plain_base_stays_plain() {
        let theme = ReportTheme::new(AnsiTheme::none());
        assert_eq!(theme.line_number_highlight_bg(), "");
        assert_eq!(theme.prefix(Style::Keyword), "");
    }

    #[test]
    fn token_styles() {
        use crate::lexer::Token;
        assert_eq!(token_style(Token::Keyword), Style::Keyword);
        assert_eq!(token_style(Token::RawStringLit), Style::LiteralString);
        assert_eq!(token_style(Token::DocComment), Style::Comment);
        assert_eq!(token_style(Token::Unknown), Style::Delimiter);
    }
}
