//! Fault severity codes, their human classification, and the dispatch mask.

use std::fmt;

/// Severity codes a runtime attaches to dispatched error events.
///
/// Bit flags, so a [`SeverityFilter`] can select any subset. The split into
/// core/compile/user variants mirrors the phases an embedded runtime reports
/// faults from (engine startup, compilation, user-level triggers).
pub mod codes {
    pub const ERROR: u32 = 1;
    pub const WARNING: u32 = 1 << 1;
    pub const PARSE: u32 = 1 << 2;
    pub const NOTICE: u32 = 1 << 3;
    pub const CORE_ERROR: u32 = 1 << 4;
    pub const CORE_WARNING: u32 = 1 << 5;
    pub const COMPILE_ERROR: u32 = 1 << 6;
    pub const COMPILE_WARNING: u32 = 1 << 7;
    pub const USER_ERROR: u32 = 1 << 8;
    pub const USER_WARNING: u32 = 1 << 9;
    pub const USER_NOTICE: u32 = 1 << 10;
    pub const STRICT: u32 = 1 << 11;
    pub const RECOVERABLE: u32 = 1 << 12;
    pub const DEPRECATED: u32 = 1 << 13;
    pub const USER_DEPRECATED: u32 = 1 << 14;
}

/// Human classification of a severity code, used as the report title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    FatalError,
    Warning,
    Notice,
    Strict,
    Deprecated,
    Unknown,
}

impl SeverityClass {
    /// Classify a raw severity code. Codes outside the recognized set
    /// degrade to [`SeverityClass::Unknown`] rather than failing.
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        use codes::*;
        match code {
            PARSE | ERROR | CORE_ERROR | COMPILE_ERROR | USER_ERROR => Self::FatalError,
            WARNING | USER_WARNING | COMPILE_WARNING | RECOVERABLE => Self::Warning,
            NOTICE | USER_NOTICE => Self::Notice,
            STRICT => Self::Strict,
            DEPRECATED | USER_DEPRECATED => Self::Deprecated,
            _ => Self::Unknown,
        }
    }

    /// The banner title for this class.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FatalError => "Fatal Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
            Self::Strict => "Strict",
            Self::Deprecated => "Deprecated",
            Self::Unknown => "Unknown error",
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mask deciding which error events a sink renders at all.
///
/// Exception events are never filtered; the mask applies to error events
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter(u32);

impl SeverityFilter {
    /// All five fatal-class codes. The default.
    pub const FATAL: Self = Self(
        codes::ERROR | codes::PARSE | codes::CORE_ERROR | codes::COMPILE_ERROR | codes::USER_ERROR,
    );

    /// Every code, recognized or not.
    pub const ALL: Self = Self(u32::MAX);

    #[must_use]
    pub fn new(mask: u32) -> Self {
        SeverityFilter(mask)
    }

    #[must_use]
    pub fn contains(self, code: u32) -> bool {
        self.0 & code != 0
    }
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self::FATAL
    }
}
