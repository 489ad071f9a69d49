//! Process-wide emitter state behind one mutex: the sink, the color and timestamp flags,
//! the derived styler, the clock and a reusable line buffer.
//!
//! The same lock covers configuration changes and the whole compose-then-write sequence, so
//! lines never interleave and an emission sees a configuration either entirely before or
//! entirely after a concurrent change.

mod compose;

pub use compose::{Layout, compose};

use crate::fmt::{Clock, StyleFn, Styler, timestamp};
use crate::output::Sink;
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

struct State {
    sink: Sink,
    colors: bool,
    timestamps: bool,
    styler: Styler,
    clock: Clock,
    buf: Vec<u8>,
}

impl State {
    fn new() -> Self {
        let mut state = Self {
            sink: Sink::default(),
            colors: true,
            timestamps: false,
            styler: Styler::pass_through(),
            clock: timestamp::system_clock,
            buf: Vec::with_capacity(256),
        };
        state.refresh_styler();
        state
    }

    /// Styling is active only when colors are requested and the sink is a terminal.
    fn refresh_styler(&mut self) {
        self.styler = Styler::new(self.colors && self.sink.is_terminal());
    }

    fn layout(&self) -> Layout {
        Layout {
            styler: self.styler,
            timestamps: self.timestamps,
        }
    }

    fn emit(&mut self, style: Option<StyleFn>, prefix: &str, message: &str) {
        let layout = self.layout();
        self.buf.clear();
        compose(
            &mut self.buf,
            layout,
            style,
            prefix,
            message,
            self.clock,
        );
        // Write failures are dropped.
        let _ = self.sink.write_line(&self.buf);
    }
}

static STATE: OnceLock<Mutex<State>> = OnceLock::new();

/// A style function that panicked mid-line poisons the lock; the state is still coherent, so
/// keep logging instead of propagating the poison to every later caller.
fn state() -> MutexGuard<'static, State> {
    STATE
        .get_or_init(|| Mutex::new(State::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Low-level primitive: composes and writes one line with an arbitrary style and prefix.
///
/// `None` as style means the prefix and message are written unstyled.
pub fn log(style: Option<StyleFn>, prefix: &str, message: &str) {
    state().emit(style, prefix, message);
}

/// Like [`log`], but takes `format_args!` output.
///
/// The arguments are rendered before the lock is taken, so a `Display` impl that logs on its
/// own cannot deadlock.
pub fn logf(style: Option<StyleFn>, prefix: &str, args: fmt::Arguments<'_>) {
    match args.as_str() {
        Some(s) => log(style, prefix, s),
        None => log(style, prefix, &args.to_string()),
    }
}

/// Installs a new sink and re-evaluates whether it is a terminal.
///
/// The outgoing sink is flushed first so buffered writers don't lose their tail.
pub fn set_sink(sink: impl Into<Sink>) {
    let mut state = state();
    let _ = state.sink.flush();
    state.sink = sink.into();
    state.refresh_styler();
}

/// Colors are on by default but only take effect when the sink is a terminal.
pub fn set_colors(enabled: bool) {
    let mut state = state();
    state.colors = enabled;
    state.refresh_styler();
}

/// Timestamps are off by default. Does not affect styling.
pub fn set_timestamps(enabled: bool) {
    state().timestamps = enabled;
}

/// Replaces the wall clock used for the timestamp column.
pub fn set_clock(clock: Clock) {
    state().clock = clock;
}

/// Restores the local system clock.
pub fn reset_clock() {
    set_clock(timestamp::system_clock);
}

/// Best-effort flush of the current sink.
pub fn flush() {
    let _ = state().sink.flush();
}

/// Whether colors were requested, regardless of what the sink is.
#[must_use]
pub fn colors_enabled() -> bool {
    state().colors
}

/// Whether lines carry the `HH:MM:SS` column.
#[must_use]
pub fn timestamps_enabled() -> bool {
    state().timestamps
}

/// Whether lines are currently written with ANSI escapes.
#[must_use]
pub fn styling_active() -> bool {
    state().styler.is_active()
}

/// Applies several settings under one lock acquisition so no line observes a half-applied mix.
pub(crate) fn configure(sink: Option<Sink>, colors: bool, timestamps: bool) {
    let mut state = state();
    if let Some(sink) = sink {
        let _ = state.sink.flush();
        state.sink = sink;
    }
    state.colors = colors;
    state.timestamps = timestamps;
    state.refresh_styler();
}
