#![forbid(unsafe_code)]

//! `termlog` - short, colored, categorised status lines for command-line tools.
//!
//! Six fixed categories, each with its own prefix and style:
//!
//! | Category | Prefix | Style |
//! |---|---|---|
//! | error | `[!!]` | red, bold |
//! | warning | `[!]` | yellow, bold |
//! | emphasis | `[*]` | bold |
//! | info | `[·]` | faint |
//! | good | `[✓]` | green, bold |
//! | bad | `[✗]` | red, bold |
//!
//! Lines go to stderr by default. Styling is applied only when colors are enabled *and* the
//! sink is a terminal, so piping output somewhere never leaks escape codes.
//!
//! # Example
//!
//! ```
//! termlog::set_sink(termlog::Sink::writer(std::io::sink()));
//!
//! termlog::info("Hello, world!");
//! termlog::emph!("Deploying ", 3, " services");
//! termlog::set_timestamps(true);
//! termlog::warnf!("retrying in {}s", 5);
//! termlog::goodln!("done", "in", 1.5, "s");
//! ```
//!
//! # Features
//!
//! - `log`: a `log::Log` implementation that forwards `log` records to the categories

pub mod category;
pub mod config;
mod error;
mod facade;
pub mod fmt;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "log")]
pub mod bridge;

pub use category::{Category, ParseCategoryError};
pub use config::{Config, Target};
pub use error::Error;
pub use facade::{
    bad, badf, badln, emph, emphf, emphln, error, errorf, errorln, fatal, fatal_if_err, fatalf,
    fatalln, good, goodf, goodln, info, infof, infoln, panic, panic_if_err, panicf, panicln, warn,
    warnf, warnln,
};
pub use fmt::{Clock, StyleFn, Styler};
pub use logger::{
    colors_enabled, flush, log, logf, reset_clock, set_clock, set_colors, set_sink,
    set_timestamps, styling_active, timestamps_enabled,
};
pub use output::Sink;
