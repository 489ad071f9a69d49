//! One free function per category and shape.
//!
//! `x(msg)` takes anything `Display`, `xf(args)` takes `format_args!` output, and
//! `xln(parts)` joins its parts with spaces and ends the line itself. The variadic macros in
//! the crate root forward here.

use crate::category::{Category, join_line};
use crate::logger;
use std::fmt::{self, Display};

macro_rules! category_fns {
    ($cat:expr, $plain:ident, $formatted:ident, $newline:ident, $what:literal) => {
        #[doc = concat!("Writes ", $what, " line.")]
        pub fn $plain(msg: impl Display) {
            $cat.log(&msg.to_string());
        }

        #[doc = concat!("Writes ", $what, " line from `format_args!` output.")]
        pub fn $formatted(args: fmt::Arguments<'_>) {
            $cat.logf(args);
        }

        #[doc = concat!("Writes ", $what, " line of space-separated parts.")]
        pub fn $newline(parts: &[&dyn Display]) {
            $cat.logln(parts);
        }
    };
}

category_fns!(Category::Error, error, errorf, errorln, "an error");
category_fns!(Category::Warning, warn, warnf, warnln, "a warning");
category_fns!(Category::Emphasis, emph, emphf, emphln, "an emphasized");
category_fns!(Category::Info, info, infof, infoln, "an info");
category_fns!(Category::Good, good, goodf, goodln, "a success");
category_fns!(Category::Bad, bad, badf, badln, "a failure");

/// The error line is already written and the lock released; make sure it left the process.
fn exit_failure() -> ! {
    logger::flush();
    std::process::exit(1)
}

/// Writes an error line, then exits with status 1.
pub fn fatal(msg: impl Display) -> ! {
    error(msg);
    exit_failure()
}

/// Like [`fatal`], with `format_args!` output.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    errorf(args);
    exit_failure()
}

/// Like [`fatal`], with space-separated parts.
pub fn fatalln(parts: &[&dyn Display]) -> ! {
    errorln(parts);
    exit_failure()
}

/// Writes an error line, then panics with the same text.
pub fn panic(msg: impl Display) -> ! {
    let msg = msg.to_string();
    error(&msg);
    std::panic!("{msg}")
}

/// Like [`panic()`], with `format_args!` output.
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    panic(args)
}

/// Like [`panic()`], with space-separated parts. The panic payload carries the trailing newline
/// that was written.
pub fn panicln(parts: &[&dyn Display]) -> ! {
    let msg = join_line(parts);
    error(&msg);
    std::panic!("{msg}")
}

/// Passes `Ok` values through; on `Err`, writes the error as an error line and exits with
/// status 1.
pub fn fatal_if_err<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => fatal(e),
    }
}

/// Passes `Ok` values through; on `Err`, writes the error as an error line and panics.
pub fn panic_if_err<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic(e),
    }
}
