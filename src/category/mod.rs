//! The six fixed message categories and the prefix glyph and style each one binds.

use crate::fmt::StyleFn;
use crate::fmt::style;
use std::fmt;
use std::str::FromStr;

/// What kind of status line is being printed. Prefix and style are constants per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Something went wrong and the user must act.
    Error,
    /// Non-fatal anomaly worth a look.
    Warning,
    /// Headline the user should not miss.
    Emphasis,
    /// Routine progress.
    Info,
    /// A step succeeded.
    Good,
    /// A step failed without aborting the tool.
    Bad,
}

impl Category {
    /// Literal prefix bytes; never styled differently per config, only wrapped.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "[!!]",
            Self::Warning => "[!]",
            Self::Emphasis => "[*]",
            Self::Info => "[·]",
            Self::Good => "[✓]",
            Self::Bad => "[✗]",
        }
    }

    /// Style applied to both prefix and message.
    #[must_use]
    pub fn style(self) -> StyleFn {
        match self {
            Self::Error | Self::Bad => style::red_bold,
            Self::Warning => style::yellow_bold,
            Self::Emphasis => style::bold,
            Self::Info => style::faint,
            Self::Good => style::green_bold,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Emphasis => "emphasis",
            Self::Info => "info",
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }

    /// Every category, in table order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Error,
            Self::Warning,
            Self::Emphasis,
            Self::Info,
            Self::Good,
            Self::Bad,
        ]
    }

    /// Emits `msg` under this category.
    pub fn log(self, msg: &str) {
        crate::logger::log(Some(self.style()), self.prefix(), msg);
    }

    /// Emits a `format_args!` message under this category.
    pub fn logf(self, args: fmt::Arguments<'_>) {
        crate::logger::logf(Some(self.style()), self.prefix(), args);
    }

    /// Emits the parts joined by single spaces and terminated by a newline.
    pub fn logln(self, parts: &[&dyn fmt::Display]) {
        self.log(&join_line(parts));
    }
}

/// Space-separated rendering with a trailing `\n`; the composer won't add a second one.
pub(crate) fn join_line(parts: &[&dyn fmt::Display]) -> String {
    use std::fmt::Write as _;

    let mut line = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{part}");
    }
    line.push('\n');
    line
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown category" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "emphasis" | "emph" => Ok(Self::Emphasis),
            "info" => Ok(Self::Info),
            "good" | "success" => Ok(Self::Good),
            "bad" | "failure" => Ok(Self::Bad),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
