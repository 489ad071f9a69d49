//! ANSI SGR wrapping for the handful of styles a status line needs.
//!
//! A `Styler` is either active or pass-through. Callers never check the mode themselves:
//! they call `bold`/`red`/... unconditionally and get plain text back when styling is off.

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FAINT: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// A style slot: receives the styler in effect for the current emission and the text to wrap.
///
/// Passing the styler in (instead of reading process state) keeps style functions pure, so
/// they can run while the emitter holds its lock.
pub type StyleFn = fn(Styler, &str) -> String;

/// Decides whether the style helpers emit escapes or return their input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Styler {
    active: bool,
}

impl Styler {
    /// Active when `active` is true, pass-through otherwise.
    #[must_use]
    pub const fn new(active: bool) -> Self {
        Self { active }
    }

    /// Escapes on: the sink is a terminal and colors were requested.
    #[must_use]
    pub const fn active() -> Self {
        Self::new(true)
    }

    /// Escapes off: pipes, files and in-memory buffers get bare text.
    #[must_use]
    pub const fn pass_through() -> Self {
        Self::new(false)
    }

    /// True when the helpers below emit escapes.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    fn wrap(self, open: &str, text: &str) -> String {
        if !self.active || text.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(open.len() + text.len() + RESET.len());
        out.push_str(open);
        out.push_str(text);
        out.push_str(RESET);
        out
    }

    /// `ESC[1m … ESC[0m`.
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.wrap(BOLD, text)
    }

    /// Dim text for low-priority detail (info lines, timestamps).
    #[must_use]
    pub fn faint(self, text: &str) -> String {
        self.wrap(FAINT, text)
    }

    /// `ESC[31m … ESC[0m`.
    #[must_use]
    pub fn red(self, text: &str) -> String {
        self.wrap(RED, text)
    }

    /// `ESC[33m … ESC[0m`.
    #[must_use]
    pub fn yellow(self, text: &str) -> String {
        self.wrap(YELLOW, text)
    }

    /// `ESC[32m … ESC[0m`.
    #[must_use]
    pub fn green(self, text: &str) -> String {
        self.wrap(GREEN, text)
    }
}

/// Identity style, used when the style slot is empty.
#[must_use]
pub fn plain(_: Styler, text: &str) -> String {
    text.to_string()
}

/// Emphasis style.
#[must_use]
pub fn bold(styler: Styler, text: &str) -> String {
    styler.bold(text)
}

/// Info style.
#[must_use]
pub fn faint(styler: Styler, text: &str) -> String {
    styler.faint(text)
}

/// Red over bold; both resets survive because the sequences nest.
#[must_use]
pub fn red_bold(styler: Styler, text: &str) -> String {
    styler.red(&styler.bold(text))
}

/// Warning style.
#[must_use]
pub fn yellow_bold(styler: Styler, text: &str) -> String {
    styler.yellow(&styler.bold(text))
}

/// Success style.
#[must_use]
pub fn green_bold(styler: Styler, text: &str) -> String {
    styler.green(&styler.bold(text))
}
